//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::dispatching::rules::DEFAULT_TIME_QUANTUM;
use crate::error::Error;
use crate::models::Ticks;

/// Tunables shared by all algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Round-Robin time quantum in ticks. Must be positive.
    pub time_quantum: Ticks,
}

impl SimulationConfig {
    /// Creates the default configuration (quantum of 2 ticks).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round-Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: Ticks) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Checks that every setting is in range.
    pub fn validate(&self) -> Result<(), Error> {
        if self.time_quantum <= 0 {
            return Err(Error::InvalidConfig(format!(
                "time quantum must be positive, got {}",
                self.time_quantum
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
        }
    }
}
