//! Fetch completion contract.
//!
//! Fetch is the asynchronous half of the domain interop surface: it copies
//! the bytes described by a source domain's scatter/gather descriptor into
//! caller-supplied local buffers. The dispatch call and the completion
//! callback form a two-phase protocol:
//!
//! - the synchronous return value of [`MemoryDomain::fetch_data`] reports
//!   whether the request was *accepted* (`Ok`) or *rejected* (`Err`);
//! - the completion callback fires exactly once, and only for accepted
//!   requests. A rejected request must never invoke it; the rejection is
//!   reported purely through the synchronous return value.
//!
//! Violating this split produces either missed completions or double
//! invocation, so the completion type is a `FnOnce`: a second invocation is
//! unrepresentable, and dropping it uninvoked is how rejection looks.
//!
//! [`MemoryDomain::fetch_data`]: crate::domain::MemoryDomain::fetch_data

use crate::iovec::IoVec;

/// One-shot completion callback for an accepted fetch request.
///
/// Invoked with the destination buffer descriptor and a status: 0 means the
/// data in the described buffers is valid, a negated errno means the
/// asynchronous operation failed and the buffer contents are undefined.
///
/// The completion may run on a different thread of control than the dispatch
/// call (e.g. a hardware completion poller), strictly after dispatch returned
/// acceptance.
pub type FetchCompletion = Box<dyn FnOnce(&[IoVec], i32) + Send>;
