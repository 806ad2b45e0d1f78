//! Classification cycle worker.
//!
//! One background thread runs image -> predictions -> verdict cycles so the
//! caller stays responsive while the classifier round-trip is in flight.
//! Requests carry a cycle id; when a new cycle is submitted before the
//! previous one finishes, the stale outcome must be discarded, never merged
//! (last submitted wins).

use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};

use crate::classifier::{ImageClassifier, ImageRef, RankedPredictions};
use crate::config::TriageConfig;
use crate::triage::{self, TriageMode, Verdict};

/// One classification cycle to run
#[derive(Clone, Debug)]
pub struct CycleRequest {
    pub cycle_id: u64,
    pub image: ImageRef,
    pub mode: TriageMode,
}

/// What came back for a cycle
#[derive(Clone, Debug)]
pub struct CycleOutcome {
    pub cycle_id: u64,
    pub mode: TriageMode,
    pub result: Result<Verdict, CycleFault>,
}

/// Faults local to a single cycle; the worker keeps running
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CycleFault {
    /// The model has not finished loading; the cycle was not run
    ModelNotReady,
    /// Classifier failure, or classifier output that violated the contract
    Rejected(String),
}

impl fmt::Display for CycleFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelNotReady => write!(f, "classifier model not ready"),
            Self::Rejected(reason) => write!(f, "cycle rejected: {}", reason),
        }
    }
}

/// Whether an outcome belongs to the most recently submitted cycle.
/// Consumers must drop outcomes for which this is false.
pub fn is_current(latest_submitted: u64, outcome: &CycleOutcome) -> bool {
    outcome.cycle_id == latest_submitted
}

/// Spawn the background cycle worker
pub fn spawn_cycle_worker(
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
    config: TriageConfig,
    rx: Receiver<CycleRequest>,
    tx: Sender<CycleOutcome>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        log::info!(
            "cycle worker started (model ready: {})",
            classifier.is_ready()
        );

        for request in rx {
            log::debug!(
                "running cycle {} for {}",
                request.cycle_id,
                request.image.path.display()
            );

            let result = run_cycle(classifier.as_ref(), &config, &request);
            if let Err(ref fault) = result {
                log::warn!("cycle {} failed: {}", request.cycle_id, fault);
            }

            let outcome = CycleOutcome {
                cycle_id: request.cycle_id,
                mode: request.mode,
                result,
            };
            if tx.send(outcome).is_err() {
                log::error!("cycle consumer dropped, stopping worker");
                break;
            }
        }

        log::info!("cycle worker shutting down");
    })
}

fn run_cycle(
    classifier: &dyn ImageClassifier,
    config: &TriageConfig,
    request: &CycleRequest,
) -> Result<Verdict, CycleFault> {
    if !classifier.is_ready() {
        return Err(CycleFault::ModelNotReady);
    }

    let raw = classifier
        .classify(&request.image)
        .map_err(|e| CycleFault::Rejected(format!("{:#}", e)))?;
    let ranked = RankedPredictions::new(raw, config)
        .map_err(|e| CycleFault::Rejected(format!("{:#}", e)))?;

    Ok(triage::classify(&ranked, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Prediction;
    use crate::triage::{RiskTier, VerdictCategory};
    use anyhow::Result;
    use crossbeam_channel::unbounded;

    /// Classifier that replays a canned ranking regardless of the image
    struct FixedClassifier {
        ready: bool,
        predictions: Vec<Prediction>,
    }

    impl ImageClassifier for FixedClassifier {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn classify(&self, _image: &ImageRef) -> Result<Vec<Prediction>> {
            Ok(self.predictions.clone())
        }
    }

    fn run_worker_once(classifier: FixedClassifier) -> CycleOutcome {
        let (req_tx, req_rx) = unbounded();
        let (out_tx, out_rx) = unbounded();
        let handle = spawn_cycle_worker(
            Arc::new(classifier),
            TriageConfig::default(),
            req_rx,
            out_tx,
        );

        req_tx
            .send(CycleRequest {
                cycle_id: 1,
                image: ImageRef::new("unused.json"),
                mode: TriageMode::Snake,
            })
            .unwrap();
        let outcome = out_rx.recv().unwrap();

        drop(req_tx);
        handle.join().unwrap();
        outcome
    }

    #[test]
    fn test_worker_produces_a_verdict() {
        let outcome = run_worker_once(FixedClassifier {
            ready: true,
            predictions: vec![Prediction::new("indian cobra", 0.95)],
        });

        assert_eq!(outcome.cycle_id, 1);
        let verdict = outcome.result.unwrap();
        assert_eq!(verdict.category, VerdictCategory::Species);
        assert_eq!(verdict.risk_tier, RiskTier::Critical);
    }

    #[test]
    fn test_model_not_ready_is_a_distinct_fault() {
        let outcome = run_worker_once(FixedClassifier {
            ready: false,
            predictions: vec![],
        });
        assert_eq!(outcome.result, Err(CycleFault::ModelNotReady));
    }

    #[test]
    fn test_malformed_output_is_rejected() {
        let outcome = run_worker_once(FixedClassifier {
            ready: true,
            predictions: vec![Prediction::new("indian cobra", 1.5)],
        });
        match outcome.result {
            Err(CycleFault::Rejected(reason)) => assert!(reason.contains("probability")),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_outcomes_are_discarded() {
        let (req_tx, req_rx) = unbounded();
        let (out_tx, out_rx) = unbounded();
        let handle = spawn_cycle_worker(
            Arc::new(FixedClassifier {
                ready: true,
                predictions: vec![Prediction::new("garter snake", 0.9)],
            }),
            TriageConfig::default(),
            req_rx,
            out_tx,
        );

        // Two cycles submitted back to back; only the second may be shown
        for cycle_id in [1, 2] {
            req_tx
                .send(CycleRequest {
                    cycle_id,
                    image: ImageRef::new("unused.json"),
                    mode: TriageMode::Snake,
                })
                .unwrap();
        }
        let latest_submitted = 2;

        let first = out_rx.recv().unwrap();
        let second = out_rx.recv().unwrap();
        assert!(!is_current(latest_submitted, &first));
        assert!(is_current(latest_submitted, &second));

        drop(req_tx);
        handle.join().unwrap();
    }
}
