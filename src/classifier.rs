//! Classifier boundary.
//!
//! The image model is an external black box: given an image it returns an
//! ordered sequence of (label, probability) pairs, most likely first. This
//! module holds the boundary trait, the validation that keeps malformed
//! classifier output away from the decision chain, and a file-backed
//! implementation that replays predictions exported as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::TriageConfig;

/// One ranked classifier output: free-text label plus probability in [0, 1]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub probability: f64,
}

impl Prediction {
    pub fn new(label: &str, probability: f64) -> Self {
        Self {
            label: label.to_string(),
            probability,
        }
    }
}

/// Validated ranked classifier output, truncated to the configured top-K.
///
/// Rank 0 is the most likely label. An empty ranking is valid input and
/// means the classifier found no pattern; a malformed entry is a caller
/// contract violation and is rejected here rather than allowed to corrupt
/// a verdict.
#[derive(Clone, Debug, Default)]
pub struct RankedPredictions(Vec<Prediction>);

impl RankedPredictions {
    pub fn new(mut raw: Vec<Prediction>, config: &TriageConfig) -> Result<Self> {
        for (rank, prediction) in raw.iter().enumerate() {
            if prediction.label.trim().is_empty() {
                bail!("prediction at rank {} has an empty label", rank);
            }
            if !(0.0..=1.0).contains(&prediction.probability) {
                bail!(
                    "prediction at rank {} has probability {} outside [0, 1]",
                    rank,
                    prediction.probability
                );
            }
        }
        raw.truncate(config.top_k);
        Ok(Self(raw))
    }

    /// The top-ranked prediction, if any
    pub fn top(&self) -> Option<&Prediction> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prediction> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Opaque handle to a captured image, as understood by the classifier
#[derive(Clone, Debug)]
pub struct ImageRef {
    pub path: PathBuf,
}

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// The external image model.
///
/// `classify` must not be called before `is_ready` returns true; the model
/// may still be loading after process start.
pub trait ImageClassifier {
    fn is_ready(&self) -> bool;

    /// Ranked predictions for the image, most likely first. May return an
    /// arbitrary number of entries, including zero.
    fn classify(&self, image: &ImageRef) -> Result<Vec<Prediction>>;
}

/// Classifier backed by a JSON export of ranked predictions.
///
/// The external model writes its output for an image as a JSON array of
/// `{"label": ..., "probability": ...}` objects in rank order; the image
/// handle points at that file.
pub struct JsonPredictionSource;

impl ImageClassifier for JsonPredictionSource {
    fn is_ready(&self) -> bool {
        true
    }

    fn classify(&self, image: &ImageRef) -> Result<Vec<Prediction>> {
        let content = fs::read_to_string(&image.path).with_context(|| {
            format!("failed to read predictions file {}", image.path.display())
        })?;
        serde_json::from_str(&content).context("failed to parse predictions file")
    }
}
