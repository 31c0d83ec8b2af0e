//! src/params.rs
//!
//! Bundelt de afstembare parameters van een sampling-run.

use crate::error::SampleError;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Aantal trials, aantal workers en (optioneel) een vaste seed.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub trials: usize, // N: aantal constructor-aanroepen
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub workers: usize, // W: aantal parallelle workers
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub seed: Option<u64>, // None → elke generator krijgt OS-entropie
}

#[cfg_attr(feature = "python", pymethods)]
impl Params {
    #[cfg_attr(feature = "python", new)]
    #[cfg_attr(feature = "python", pyo3(signature = (trials = 10_000, workers = 4, seed = None)))]
    pub fn new(trials: usize, workers: usize, seed: Option<u64>) -> Self {
        Self {
            trials,
            workers,
            seed,
        }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            trials: 10_000,
            workers: 4,
            seed: None,
        }
    }
}

impl Params {
    /// Zet een vaste seed, zodat sequentiële runs reproduceerbaar zijn.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Weigert `trials == 0` en `workers == 0` voordat er werk wordt ingepland.
    pub fn validate(&self) -> Result<(), SampleError> {
        validate_trials(self.trials)?;
        validate_workers(self.workers)
    }
}

pub(crate) fn validate_trials(trials: usize) -> Result<(), SampleError> {
    if trials == 0 {
        return Err(SampleError::InvalidTrials { trials });
    }
    Ok(())
}

pub(crate) fn validate_workers(workers: usize) -> Result<(), SampleError> {
    if workers == 0 {
        return Err(SampleError::InvalidWorkers { workers });
    }
    Ok(())
}
