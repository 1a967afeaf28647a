//! Single outstanding-request guard for the HTTP boundary
//!
//! A capacity-1 token acquired without waiting. A second generation request
//! that arrives while one is running is rejected rather than queued. The
//! dispatcher itself stays reentrant.

use crate::logging::log_warn;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Message returned to callers rejected by the gate
pub const BUSY_MESSAGE: &str = "Process already in progress. Please wait...";

/// Held for the lifetime of an admitted request; dropping it readmits.
#[derive(Debug)]
pub struct AdmissionPermit {
    _permit: Option<OwnedSemaphorePermit>,
}

/// Capacity-1 admission control
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    semaphore: Option<Arc<Semaphore>>,
}

impl Default for AdmissionGate {
    fn default() -> Self {
        Self::single_flight()
    }
}

impl AdmissionGate {
    /// Admit one request at a time.
    pub fn single_flight() -> Self {
        Self {
            semaphore: Some(Arc::new(Semaphore::new(1))),
        }
    }

    /// Admit everything.
    pub fn disabled() -> Self {
        Self { semaphore: None }
    }

    pub fn new(single_flight: bool) -> Self {
        if single_flight {
            Self::single_flight()
        } else {
            Self::disabled()
        }
    }

    /// Take the token if it is free; never waits.
    pub fn try_admit(&self) -> Option<AdmissionPermit> {
        let Some(semaphore) = &self.semaphore else {
            return Some(AdmissionPermit { _permit: None });
        };

        match Arc::clone(semaphore).try_acquire_owned() {
            Ok(permit) => Some(AdmissionPermit {
                _permit: Some(permit),
            }),
            Err(_) => {
                log_warn!("Generation request rejected, another one is in progress");
                None
            }
        }
    }

    /// Whether a request currently holds the token.
    pub fn is_busy(&self) -> bool {
        self.semaphore
            .as_ref()
            .is_some_and(|s| s.available_permits() == 0)
    }
}
