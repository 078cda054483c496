//! Observer: invocation plus projection, recorded
//!
//! The observer is an explicit context object the caller constructs and
//! injects. There is no hidden module-level instance, so independent
//! observers coexist and tests never leak state. It retains only a running
//! call counter, updated atomically; no history of observations is kept.

use crate::dimensional::divide;
use crate::lens::Lens;
use crate::substrate::{Request, Substrate};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use substratum_core::{Identity, Result};
use tracing::trace;

/// An immutable record of one observation
///
/// Produced fresh by every `observe` call and never cached; observations
/// have no independent lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// Identity of the observed substrate
    pub substrate: Identity,
    /// Identity of the lens the manifestation passed through
    pub lens: Identity,
    /// The projected value
    pub manifestation: u64,
}

/// Context object wrapping invocation and lens application
#[derive(Debug, Default)]
pub struct Observer {
    calls: AtomicU64,
}

impl Observer {
    /// Create an observer with a zeroed call counter
    pub fn new() -> Self {
        Observer::default()
    }

    /// Invoke the substrate, project through the lens, record the call
    ///
    /// The counter increment is atomic, so concurrent observations never
    /// lose a count.
    pub fn observe(&self, substrate: &Substrate, lens: &Lens) -> Observation {
        let manifested = substrate.invoke(Request::Base);
        let manifestation = lens.project(manifested);
        self.calls.fetch_add(1, Ordering::Relaxed);
        trace!(
            substrate = %substrate.identity(),
            lens = %lens.identity(),
            manifestation,
            "observation"
        );
        Observation {
            substrate: substrate.identity(),
            lens: lens.identity(),
            manifestation,
        }
    }

    /// Observe a single dimension of the substrate's decomposition
    ///
    /// Divides the substrate, selects the dimension at `index`, and applies
    /// the lens to its level when one is supplied; otherwise returns the
    /// raw level.
    ///
    /// ## Errors
    ///
    /// `Error::Index` when `index` falls outside `[0, 9)`.
    pub fn observe_dimension(
        &self,
        substrate: &Substrate,
        index: usize,
        lens: Option<&Lens>,
    ) -> Result<u64> {
        let decomposition = divide(substrate);
        let dimension = decomposition.get(index)?;
        self.calls.fetch_add(1, Ordering::Relaxed);
        let level = dimension.level();
        Ok(match lens {
            Some(lens) => lens.project(level),
            None => level,
        })
    }

    /// Total number of observations made through this observer
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}
