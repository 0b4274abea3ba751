//! Failure conditions reported by queue operations.

use std::collections::TryReserveError;

use thiserror::Error;

/// Error returned by the fallible queue operations.
///
/// Every variant is local and recoverable: the operation that reports it has
/// already released any partially allocated node or value, and the queue is
/// left exactly as it was before the call.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage for a new node could not be obtained.
    #[error("failed to allocate a queue node")]
    NodeAlloc,

    /// Storage for a node's value could not be obtained.
    #[error("failed to allocate value storage")]
    ValueAlloc(#[source] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;
