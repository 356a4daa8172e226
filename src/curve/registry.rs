//! The active curve set and the query façade over it
//!
//! [`CurveRegistry`] holds the curves of the currently loaded graph. The
//! display layer asks it for "curve C at input text T" and gets back an
//! [`EvaluationResult`]. Each curve memoizes its own parse; the registry
//! keeps the most recent input text and result of each curve. Loading a new
//! set or clearing drops all of it.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::curve::Curve;
use super::descriptor::{CurveDescriptor, GraphAnalysis};
use crate::config::EngineConfig;
use crate::error::{CurveError, Result};
use crate::result::{parse_input, EvaluationResult, InputError};

/// Registry of the curves extracted from one graph
#[derive(Debug, Default)]
pub struct CurveRegistry {
    config: EngineConfig,
    curves: Vec<Curve>,
    index: HashMap<String, usize>,
    /// Latest (input text, result) per curve id
    results: HashMap<String, (String, EvaluationResult)>,
    graph_description: String,
    question_answer: Option<String>,
}

impl CurveRegistry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with a validated configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the entire active set.
    ///
    /// Every cached parse and result from the previous set is dropped. Fails
    /// without touching the current set if two curves share an id.
    pub fn load_curves(&mut self, mut curves: Vec<Curve>) -> Result<()> {
        let mut seen = HashSet::new();
        for curve in &curves {
            if !seen.insert(curve.id()) {
                return Err(CurveError::DuplicateCurve(curve.id().to_string()));
            }
        }

        // Curves may arrive already parsed under another configuration
        for curve in &mut curves {
            curve.reset_parse();
        }

        let index = curves
            .iter()
            .enumerate()
            .map(|(i, curve)| (curve.id().to_string(), i))
            .collect();

        self.curves = curves;
        self.index = index;
        self.results.clear();
        self.graph_description.clear();
        self.question_answer = None;

        for curve in &self.curves {
            if !curve.looks_mathematical() {
                warn!(
                    curve = %curve.id(),
                    equation = %curve.raw_equation(),
                    "equation looks like descriptive text"
                );
            }
        }
        debug!(count = self.curves.len(), "loaded curve set");
        Ok(())
    }

    /// Replace the active set with curves built from extraction descriptors
    pub fn load_descriptors(&mut self, descriptors: Vec<CurveDescriptor>) -> Result<()> {
        let curves = descriptors
            .into_iter()
            .enumerate()
            .map(|(i, descriptor)| descriptor.into_curve(i))
            .collect();
        self.load_curves(curves)
    }

    /// Apply the response of a graph analysis call.
    ///
    /// A successful extraction replaces the curve set. A question-answer
    /// response clears the curves and keeps the answer. A failed call is
    /// returned as [`CurveError::Extraction`] and leaves the registry as is.
    pub fn load_analysis(&mut self, analysis: GraphAnalysis) -> Result<()> {
        if !analysis.success {
            return Err(CurveError::Extraction(
                analysis
                    .error
                    .unwrap_or_else(|| "Failed to analyze graph".to_string()),
            ));
        }

        if let Some(answer) = analysis.question_answer {
            self.clear();
            self.question_answer = Some(answer);
            return Ok(());
        }

        self.load_descriptors(analysis.curves)?;
        self.graph_description = analysis.graph_description;
        Ok(())
    }

    /// Decode a graph analysis response from JSON and apply it
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let analysis: GraphAnalysis = serde_json::from_str(json)?;
        self.load_analysis(analysis)
    }

    /// Empty the registry
    pub fn clear(&mut self) {
        self.curves.clear();
        self.index.clear();
        self.results.clear();
        self.graph_description.clear();
        self.question_answer = None;
        debug!("cleared curve set");
    }

    /// Evaluate curve `curve_id` at the value typed in `input_text`.
    ///
    /// The input is checked first, so a bad input is reported the same way
    /// whatever the state of the curve. The curve's equation is parsed on its
    /// first query; a parse failure is returned from then on without parsing
    /// again.
    pub fn query_y(&mut self, curve_id: &str, input_text: &str) -> EvaluationResult {
        let x = match parse_input(input_text) {
            Ok(x) => x,
            Err(err) => return err.into(),
        };

        if let Some((text, hit)) = self.results.get(curve_id) {
            if text == input_text {
                trace!(curve = %curve_id, input = %input_text, "result cache hit");
                return hit.clone();
            }
        }

        let Some(curve) = self.get(curve_id) else {
            return InputError::UnknownCurve {
                id: curve_id.to_string(),
            }
            .into();
        };

        let result = curve.evaluate(x, &self.config);
        if self.config.cache_results {
            self.results.insert(
                curve_id.to_string(),
                (input_text.to_string(), result.clone()),
            );
        }
        result
    }

    /// Evaluate every curve at the same input, in curve order.
    ///
    /// Curves are independent, so they are evaluated in parallel. Results are
    /// not added to the cache.
    pub fn query_all(&self, input_text: &str) -> Vec<(String, EvaluationResult)> {
        match parse_input(input_text) {
            Ok(x) => self
                .curves
                .par_iter()
                .map(|curve| (curve.id().to_string(), curve.evaluate(x, &self.config)))
                .collect(),
            Err(err) => self
                .curves
                .iter()
                .map(|curve| (curve.id().to_string(), EvaluationResult::from(err.clone())))
                .collect(),
        }
    }

    /// Whether the display layer should show the "not an equation" warning.
    ///
    /// `None` for an unknown curve. Parses the equation if needed.
    pub fn advisory_warning(&self, curve_id: &str) -> Option<bool> {
        self.get(curve_id)
            .map(|curve| curve.needs_warning(&self.config))
    }

    /// Whether `x` falls outside the curve's advisory input range.
    ///
    /// `None` for an unknown curve or one without a numeric range.
    pub fn outside_hint(&self, curve_id: &str, x: f64) -> Option<bool> {
        self.get(curve_id)
            .and_then(|curve| curve.domain_hint())
            .and_then(|hint| hint.contains(x))
            .map(|inside| !inside)
    }

    pub fn get(&self, curve_id: &str) -> Option<&Curve> {
        self.index.get(curve_id).map(|&i| &self.curves[i])
    }

    /// The active curves in load order
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Number of curves with a memoized result
    pub fn cached_results(&self) -> usize {
        self.results.len()
    }

    pub fn graph_description(&self) -> &str {
        &self.graph_description
    }

    pub fn question_answer(&self) -> Option<&str> {
        self.question_answer.as_deref()
    }
}
