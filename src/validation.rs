//! Input validation for process sets.
//!
//! Checks semantic integrity of loaded processes before any simulation
//! runs. Detects:
//! - Duplicate process IDs
//! - Non-positive burst durations
//! - Negative arrival times
//! - Timelines that would run past the end of the tick range
//!
//! An empty process set passes: it is degenerate, not invalid.

use std::collections::HashSet;

use crate::models::{Process, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before tick 0.
    NegativeArrival,
    /// The schedule could end beyond the largest representable tick.
    TickOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst is positive
/// 3. Every arrival is at or after tick 0
/// 4. `arrival + burst` fits in a tick for every process, and so does the
///    latest arrival plus the sum of all bursts (the clock's upper bound)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has burst {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at {}", p.id, p.arrival),
            ));
        }

        if p.arrival.checked_add(p.burst).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TickOverflow,
                format!(
                    "Process {} finishes past the tick range (arrival {}, burst {})",
                    p.id, p.arrival, p.burst
                ),
            ));
        }
    }

    if errors.is_empty() && horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TickOverflow,
            "Latest arrival plus total burst exceeds the tick range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the simulation clock, `None` on overflow.
fn horizon(processes: &[Process]) -> Option<Ticks> {
    let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst))
}
