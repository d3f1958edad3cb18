//! Translation call parameters and results.
//!
//! Translation converts the description of a buffer from a source domain's
//! addressing scheme into an equivalent description valid in a destination
//! domain. No data moves; both domains describe the same physical memory.

use std::sync::Arc;

use crate::domain::MemoryDomain;

/// Ancillary per-call parameters for a translation, tagged by the destination
/// device type.
///
/// Caller-owned and borrowed only for the duration of one
/// [`MemoryDomain::translate_data`] call.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum TranslationCtx {
    /// Destination is an RDMA-type domain.
    Rdma {
        /// Opaque handle for the destination queue pair (`ibv_qp`).
        qp: usize,
    },
}

/// Device-specific payload of a successful translation, tagged by the
/// destination device type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TranslationKeys {
    /// Memory keys for an RDMA-type destination.
    Rdma {
        /// Local key of the memory region covering the translated buffer.
        lkey: u32,
        /// Remote key of the memory region covering the translated buffer.
        rkey: u32,
    },
    /// The destination addresses the buffer directly; no extra metadata.
    Direct,
}

/// Result of a successful translation.
///
/// Produced by value from the translation callback, so it exists only on the
/// success path; a failed call yields no result to misread.
#[derive(Debug, Clone)]
pub struct TranslationResult {
    /// Buffer address translated into the destination domain's space.
    pub addr: u64,
    /// Length of the buffer in bytes.
    pub len: usize,
    /// Destination domain the translation was performed for.
    ///
    /// Contract: must be the `dst_domain` argument that was passed to
    /// [`MemoryDomain::translate_data`]. The callback is responsible for
    /// upholding this; the core documents it rather than enforcing it.
    pub dst_domain: Arc<MemoryDomain>,
    /// Device-specific translation metadata.
    pub keys: TranslationKeys,
}
