//! `DistressRelay` — subscription registry and synchronous fan-out.
//!
//! # Duplicates
//!
//! Subscriptions have set semantics: registering the same `(evader, listener)`
//! pair twice keeps the first registration only, so a listener never hears the
//! same signal twice.  Registration order is preserved for delivery.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use st_core::AgentId;
use tracing::{debug, trace};

use crate::{RelayError, RelayResult};

// ── DistressSink ──────────────────────────────────────────────────────────────

/// Receiver side of a notification.
///
/// The driver implements this to write the listener's `distressed` flag (and
/// report the delivery to its observer).  Closures work too.
pub trait DistressSink {
    fn receive(&mut self, listener: AgentId, evader: AgentId, distressed: bool);
}

impl<F: FnMut(AgentId, AgentId, bool)> DistressSink for F {
    #[inline]
    fn receive(&mut self, listener: AgentId, evader: AgentId, distressed: bool) {
        self(listener, evader, distressed)
    }
}

/// A sink that writes straight into a per-agent flag slice indexed by
/// `AgentId`.  Listeners outside the slice are ignored.
pub struct DistressFlags<'a>(pub &'a mut [bool]);

impl DistressSink for DistressFlags<'_> {
    #[inline]
    fn receive(&mut self, listener: AgentId, _evader: AgentId, distressed: bool) {
        if let Some(flag) = self.0.get_mut(listener.index()) {
            *flag = distressed;
        }
    }
}

// ── DistressRelay ─────────────────────────────────────────────────────────────

/// Evader → listeners registry.
#[derive(Default)]
pub struct DistressRelay {
    listeners: HashMap<AgentId, Vec<AgentId>>,
    /// Cached total subscription count for O(1) `len()`.
    total:     usize,
}

impl DistressRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` to receive `evader`'s distress signals.
    ///
    /// Returns `Ok(false)` if the pair was already registered.
    ///
    /// # Errors
    ///
    /// [`RelayError::SelfSubscription`] when `evader == listener`.
    pub fn subscribe(&mut self, evader: AgentId, listener: AgentId) -> RelayResult<bool> {
        if evader == listener {
            return Err(RelayError::SelfSubscription(evader));
        }
        let list = self.listeners.entry(evader).or_default();
        if list.contains(&listener) {
            debug!(%evader, %listener, "duplicate distress subscription ignored");
            return Ok(false);
        }
        list.push(listener);
        self.total += 1;
        Ok(true)
    }

    /// One-time setup from an explicit list of `(evader, listener)` pairs.
    ///
    /// Returns the number of new subscriptions.  Stops at the first invalid
    /// pair.
    pub fn subscribe_all<I>(&mut self, pairs: I) -> RelayResult<usize>
    where
        I: IntoIterator<Item = (AgentId, AgentId)>,
    {
        let mut added = 0;
        for (evader, listener) in pairs {
            if self.subscribe(evader, listener)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Listeners of `evader` in registration order (empty if none).
    pub fn listeners(&self, evader: AgentId) -> &[AgentId] {
        self.listeners.get(&evader).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Deliver `distressed` from `evader` to every listener, synchronously and
    /// in registration order.  Returns the number of deliveries.
    ///
    /// Fire-and-forget: nothing is queued or retried.
    pub fn notify<S: DistressSink + ?Sized>(
        &self,
        evader:     AgentId,
        distressed: bool,
        sink:       &mut S,
    ) -> usize {
        let listeners = self.listeners(evader);
        for &listener in listeners {
            trace!(%evader, %listener, distressed, "distress delivered");
            sink.receive(listener, evader, distressed);
        }
        listeners.len()
    }

    /// Total number of (evader, listener) subscriptions.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct evaders with at least one listener.
    pub fn evader_count(&self) -> usize {
        self.listeners.len()
    }
}
