//! memdomain - Memory-domain registry with pluggable translation and
//! asynchronous fetch.
//!
//! A memory domain is an addressable memory space plus the class of DMA
//! device able to operate on it (an RDMA NIC addressing registered regions
//! through memory keys, a DMA engine addressing physical or I/O-virtual
//! memory). Subsystems that describe buffers in different domains interoperate
//! through two protocols, neither of which requires the caller to understand
//! the peer's addressing model:
//!
//! - **translation**: convert an address/length description from the source
//!   domain's scheme into an equivalent description in the destination
//!   domain's scheme, moving no data;
//! - **fetch**: asynchronously copy the bytes described by a source domain
//!   into caller-supplied local buffers, reporting the outcome through a
//!   one-shot completion callback.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      DomainRegistry                        │
//! │   ordered live set, create / destroy / get_first+get_next  │
//! └────────────┬──────────────────┬──────────────────┬─────────┘
//!              ▼                  ▼                  ▼
//!      ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!      │ MemoryDomain │   │ MemoryDomain │   │ MemoryDomain │
//!      │  type, ctx,  │   │     ...      │   │     ...      │
//!      │  id,         │   └──────────────┘   └──────────────┘
//!      │  translate ──┼──▶ provider translation callback
//!      │  fetch ──────┼──▶ provider fetch callback ──▶ completion (once)
//!      └──────────────┘
//! ```
//!
//! The core dispatches; concrete behavior is installed per domain by the
//! subsystem owning the hardware resource (e.g. an RDMA transport), which
//! creates the domain once, installs callbacks before publishing the handle,
//! and destroys it only after all calls against it have quiesced.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use memdomain::{
//!     DmaDeviceType, DomainRegistry, TranslationCtx, TranslationKeys, TranslationResult,
//! };
//!
//! let registry = DomainRegistry::new();
//! let domain = registry.create(DmaDeviceType::Rdma, None, "mlx5_0")?;
//!
//! // Identity translation: both domains address the memory the same way.
//! domain.set_translation(|_src, _src_ctx, dst, _dst_ctx, addr, len| {
//!     Ok(TranslationResult {
//!         addr,
//!         len,
//!         dst_domain: Arc::clone(dst),
//!         keys: TranslationKeys::Rdma { lkey: 0x10, rkey: 0x20 },
//!     })
//! });
//!
//! let result = domain.translate_data(
//!     None,
//!     &domain,
//!     &TranslationCtx::Rdma { qp: 0 },
//!     0x1000,
//!     64,
//! )?;
//! assert_eq!(result.addr, 0x1000);
//!
//! registry.destroy(&domain);
//! # Ok::<(), memdomain::Error>(())
//! ```
//!
//! The crate is organized as follows:
//!
//! - [`registry`]: ordered live-domain set and discovery ([`DomainRegistry`])
//! - [`domain`]: domain records, callback slots and dispatch ([`MemoryDomain`])
//! - [`translation`]: translation parameters and results
//! - [`fetch`]: the two-phase fetch completion contract
//! - [`iovec`]: scatter/gather buffer descriptors
//! - [`error`]: error types

pub mod domain;
pub mod error;
pub mod fetch;
pub mod iovec;
pub mod registry;
pub mod translation;

pub use domain::{DmaDeviceType, DomainContext, FetchFn, MemoryDomain, TranslateFn};
pub use error::{Error, Result};
pub use fetch::FetchCompletion;
pub use iovec::{IoVec, total_len};
pub use registry::DomainRegistry;
pub use translation::{TranslationCtx, TranslationKeys, TranslationResult};

/// Identifier of the built-in RDMA DMA device class.
///
/// Transports following the standard RDMA model register their domains under
/// this id so unrelated callers can discover them with
/// [`DomainRegistry::get_first`].
pub const RDMA_DMA_DEVICE_ID: &str = "RDMA_DMA_DEVICE";
