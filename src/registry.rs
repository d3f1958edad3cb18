//! Process-wide registry of live memory domains.
//!
//! The registry is the authoritative ordered set of domains between create
//! and destroy, and the discovery surface for callers asking questions like
//! "does an RDMA domain already exist for this device id". A single mutex
//! serializes create, destroy and enumeration; it is never held across a
//! user-supplied callback.
//!
//! Enumeration is keyed by each record's creation sequence number rather
//! than by position, so a traversal is restartable and stays valid when a
//! domain is destroyed mid-iteration: the destroyed domain simply stops
//! appearing, and `get_next` on its handle still resumes from the right
//! place. No snapshot isolation: a full pass sees the live set, in creation
//! order.

use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use crate::domain::{DmaDeviceType, DomainContext, MemoryDomain};
use crate::error::{Error, Result};

/// Ordered collection of live memory domains.
pub struct DomainRegistry {
    inner: Mutex<Inner>,
}

struct Inner {
    /// Live domains in creation order (ascending `seq`).
    domains: Vec<Arc<MemoryDomain>>,
    next_seq: u64,
}

static GLOBAL: LazyLock<DomainRegistry> = LazyLock::new(DomainRegistry::new);

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                domains: Vec::new(),
                next_seq: 0,
            }),
        }
    }

    /// The process-wide registry.
    ///
    /// Subsystems that publish domains for discovery by unrelated callers
    /// register them here; tests and embedded uses may prefer a private
    /// [`DomainRegistry::new`] instance.
    pub fn global() -> &'static DomainRegistry {
        &GLOBAL
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a new memory domain and append it to the registry.
    ///
    /// `id` names the DMA device able to access the domain; it is not
    /// required to be unique, and enumeration filtered by a shared id yields
    /// every match in creation order.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `id` is empty.
    pub fn create(
        &self,
        device_type: DmaDeviceType,
        context: Option<DomainContext>,
        id: &str,
    ) -> Result<Arc<MemoryDomain>> {
        if id.is_empty() {
            return Err(Error::InvalidArgument("empty device id"));
        }

        let mut inner = self.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let domain = Arc::new(MemoryDomain::new(device_type, context, id.to_owned(), seq));
        inner.domains.push(Arc::clone(&domain));
        drop(inner);

        tracing::debug!(id, ?device_type, seq, "created memory domain");
        Ok(domain)
    }

    /// Remove a domain from the registry and revoke it.
    ///
    /// No-op if the domain was already destroyed. Callers must ensure no
    /// translate/fetch calls are in flight against the handle; quiescence is
    /// a documented precondition, not enforced here.
    pub fn destroy(&self, domain: &Arc<MemoryDomain>) {
        let mut inner = self.lock();
        let before = inner.domains.len();
        inner.domains.retain(|d| !Arc::ptr_eq(d, domain));
        let removed = inner.domains.len() != before;
        drop(inner);

        if removed {
            domain.revoke();
            tracing::debug!(id = %domain.dma_device_id(), "destroyed memory domain");
        }
    }

    /// Get the first live domain, optionally restricted to domains whose
    /// identifier equals `id`.
    pub fn get_first(&self, id: Option<&str>) -> Option<Arc<MemoryDomain>> {
        let inner = self.lock();
        inner
            .domains
            .iter()
            .find(|d| id.is_none_or(|id| d.dma_device_id() == id))
            .map(Arc::clone)
    }

    /// Get the domain following `prev` in creation order, optionally
    /// restricted to domains whose identifier equals `id`.
    ///
    /// Combined with [`get_first`](Self::get_first) this iterates every live
    /// domain exactly once per pass. `prev` may itself have been destroyed;
    /// iteration resumes after its creation slot.
    pub fn get_next(&self, prev: &Arc<MemoryDomain>, id: Option<&str>) -> Option<Arc<MemoryDomain>> {
        let inner = self.lock();
        inner
            .domains
            .iter()
            .find(|d| d.seq > prev.seq && id.is_none_or(|id| d.dma_device_id() == id))
            .map(Arc::clone)
    }
}
