//! Scatter/gather buffer descriptors.
//!
//! An [`IoVec`] names a contiguous span of a memory domain's address space.
//! Slices of `IoVec` describe scatter/gather buffers for translation and
//! fetch; the descriptor carries no ownership of the bytes it names.

/// One (address, length) element of a scatter/gather buffer description.
///
/// Addresses are raw values in the owning domain's address space; for an
/// RDMA-type domain this is typically a registered virtual address, for a
/// DMA-type domain a physical or I/O-virtual address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoVec {
    /// Start address in the owning domain's address space.
    pub addr: u64,
    /// Length of the span in bytes.
    pub len: usize,
}

impl IoVec {
    /// Create a descriptor element.
    pub fn new(addr: u64, len: usize) -> Self {
        Self { addr, len }
    }
}

/// Total byte length described by a scatter/gather buffer.
pub fn total_len(iov: &[IoVec]) -> usize {
    iov.iter().map(|v| v.len).sum()
}
