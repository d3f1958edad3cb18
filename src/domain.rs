//! Memory domain records and callback dispatch.
//!
//! A [`MemoryDomain`] represents one addressable memory space together with
//! the class of DMA device able to operate on it. The record itself is
//! device-agnostic: the concrete behavior lives in two pluggable callback
//! slots (translate, fetch) installed by whichever subsystem owns the
//! underlying hardware resource. A domain without a callback simply rejects
//! the corresponding operation with [`Error::NotSupported`].
//!
//! Handles are `Arc<MemoryDomain>`; the registry holds one reference for the
//! create-to-destroy lifetime, callers may hold more. Destroy revokes the
//! record rather than freeing it out from under live handles: a revoked
//! domain disappears from enumeration and its dispatch entry points fail
//! with an invalid-argument error.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{Error, Result};
use crate::fetch::FetchCompletion;
use crate::iovec::IoVec;
use crate::translation::{TranslationCtx, TranslationResult};

/// Type of DMA device able to access a memory domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmaDeviceType {
    /// RDMA devices perform DMA on memory domains using the standard RDMA
    /// model (protection domain, remote key, address).
    Rdma,
    /// DMA devices perform DMA on memory domains using physical or
    /// I/O-virtual addresses.
    Dma,
}

/// Opaque per-domain ancillary data supplied at creation, tagged by device
/// type.
///
/// The core never inspects the payload; it is stored verbatim for the
/// domain's callbacks and callers to retrieve through
/// [`MemoryDomain::context`].
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum DomainContext {
    /// Context for an RDMA-type domain.
    Rdma {
        /// Opaque handle for the protection domain (`ibv_pd`).
        pd: usize,
    },
}

/// Translation callback installed on a source domain.
///
/// Arguments: source domain, optional per-call caller context, destination
/// domain, destination ancillary data, buffer address and length in source
/// domain space. Synchronous; returns the translated description or a
/// domain-specific negated-errno failure.
pub type TranslateFn = Arc<
    dyn Fn(
            &Arc<MemoryDomain>,
            Option<&dyn Any>,
            &Arc<MemoryDomain>,
            &TranslationCtx,
            u64,
            usize,
        ) -> Result<TranslationResult>
        + Send
        + Sync,
>;

/// Fetch callback installed on a source domain.
///
/// Arguments: source domain, optional per-call caller context, source and
/// destination scatter/gather descriptors, one-shot completion. Must invoke
/// the completion exactly once if and only if it returns `Ok(())`; on `Err`
/// the completion must be dropped uninvoked (see [`crate::fetch`]).
pub type FetchFn = Arc<
    dyn Fn(&Arc<MemoryDomain>, Option<&dyn Any>, &[IoVec], &[IoVec], FetchCompletion) -> Result<()>
        + Send
        + Sync,
>;

/// One memory domain: an addressable memory space plus the DMA device class
/// able to operate on it.
pub struct MemoryDomain {
    device_type: DmaDeviceType,
    context: Option<DomainContext>,
    id: String,
    /// Registry insertion order; keys restartable enumeration.
    pub(crate) seq: u64,
    /// Set by destroy. A revoked domain is no longer enumerable and rejects
    /// dispatch.
    revoked: AtomicBool,
    translate: RwLock<Option<TranslateFn>>,
    fetch: RwLock<Option<FetchFn>>,
}

impl std::fmt::Debug for MemoryDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDomain")
            .field("device_type", &self.device_type)
            .field("id", &self.id)
            .field("seq", &self.seq)
            .field("revoked", &self.revoked.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl MemoryDomain {
    pub(crate) fn new(
        device_type: DmaDeviceType,
        context: Option<DomainContext>,
        id: String,
        seq: u64,
    ) -> Self {
        Self {
            device_type,
            context,
            id,
            seq,
            revoked: AtomicBool::new(false),
            translate: RwLock::new(None),
            fetch: RwLock::new(None),
        }
    }

    /// Get the context passed at creation.
    pub fn context(&self) -> Option<&DomainContext> {
        self.context.as_ref()
    }

    /// Get the type of the DMA device that can access this memory domain.
    pub fn dma_device_type(&self) -> DmaDeviceType {
        self.device_type
    }

    /// Get the identifier of the DMA device that can access this memory
    /// domain.
    pub fn dma_device_id(&self) -> &str {
        &self.id
    }

    /// Set the translation callback. Overwrites any existing callback.
    pub fn set_translation<F>(&self, translate_cb: F)
    where
        F: Fn(
                &Arc<MemoryDomain>,
                Option<&dyn Any>,
                &Arc<MemoryDomain>,
                &TranslationCtx,
                u64,
                usize,
            ) -> Result<TranslationResult>
            + Send
            + Sync
            + 'static,
    {
        *self
            .translate
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(translate_cb));
    }

    /// Set the fetch callback. Overwrites any existing callback.
    pub fn set_fetch<F>(&self, fetch_cb: F)
    where
        F: Fn(&Arc<MemoryDomain>, Option<&dyn Any>, &[IoVec], &[IoVec], FetchCompletion) -> Result<()>
            + Send
            + Sync
            + 'static,
    {
        *self.fetch.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(fetch_cb));
    }

    pub(crate) fn revoke(&self) {
        self.revoked.store(true, Ordering::Release);
    }

    pub(crate) fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::Acquire)
    }

    /// Translate the buffer at `addr`/`len` in this domain's address space
    /// into an equivalent description in `dst_domain` space.
    ///
    /// No data moves; both domains must describe the same physical memory and
    /// only the description is converted. Dispatches to the translation
    /// callback installed with [`set_translation`](Self::set_translation).
    ///
    /// # Errors
    /// - [`Error::NotSupported`] if no translation callback is installed.
    /// - [`Error::InvalidArgument`] if this domain has been destroyed.
    /// - Any error the callback returns, passed through uninterpreted.
    pub fn translate_data(
        self: &Arc<Self>,
        src_domain_ctx: Option<&dyn Any>,
        dst_domain: &Arc<MemoryDomain>,
        dst_domain_ctx: &TranslationCtx,
        addr: u64,
        len: usize,
    ) -> Result<TranslationResult> {
        if self.is_revoked() {
            return Err(Error::InvalidArgument("translate on destroyed domain"));
        }
        // Clone the slot so the lock is not held across the user callback.
        let cb = self
            .translate
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let Some(cb) = cb else {
            tracing::debug!(id = %self.id, "translate rejected: no callback installed");
            return Err(Error::NotSupported);
        };
        cb(self, src_domain_ctx, dst_domain, dst_domain_ctx, addr, len)
    }

    /// Asynchronously fetch the bytes described by `src_iov` in this domain's
    /// address space into the caller-supplied local buffers described by
    /// `dst_iov`.
    ///
    /// Dispatches to the fetch callback installed with
    /// [`set_fetch`](Self::set_fetch). `Ok(())` means the request was
    /// accepted and `cpl_cb` will fire exactly once, possibly on another
    /// thread of control, strictly after this call returns. On `Err` the
    /// request was rejected and `cpl_cb` is never invoked.
    ///
    /// Destination buffers must already be allocated and their total length
    /// must be at least the total length described by `src_iov`; the core
    /// does not validate capacity.
    ///
    /// # Errors
    /// - [`Error::NotSupported`] if no fetch callback is installed.
    /// - [`Error::InvalidArgument`] if this domain has been destroyed.
    /// - Any error the callback returns, passed through uninterpreted.
    pub fn fetch_data(
        self: &Arc<Self>,
        src_domain_ctx: Option<&dyn Any>,
        src_iov: &[IoVec],
        dst_iov: &[IoVec],
        cpl_cb: FetchCompletion,
    ) -> Result<()> {
        if self.is_revoked() {
            return Err(Error::InvalidArgument("fetch on destroyed domain"));
        }
        let cb = self
            .fetch
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let Some(cb) = cb else {
            tracing::debug!(id = %self.id, "fetch rejected: no callback installed");
            return Err(Error::NotSupported);
        };
        cb(self, src_domain_ctx, src_iov, dst_iov, cpl_cb)
    }
}
