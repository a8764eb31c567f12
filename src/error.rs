use std::collections::TryReserveError;

use thiserror::Error;

/// Construction-time failures for [`RingStore`](crate::RingStore).
///
/// Every other failure mode keeps the store valid and unchanged: a push
/// rejected on a full store returns [`FullError`], and empty or out-of-range
/// accesses return `None` as the std collections do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Capacity must be at least one slot.
    #[error("capacity must be non-zero")]
    ZeroCapacity,

    /// Masked indexing was requested for a capacity the bitmask cannot cover.
    #[error("masked indexing requires a power-of-two capacity, got {0}")]
    CapacityNotPowerOfTwo(usize),

    /// The backing allocation could not be reserved.
    #[error("failed to allocate storage for {capacity} slots")]
    OutOfMemory {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}

/// A push rejected under [`OverflowPolicy::Reject`](crate::OverflowPolicy).
///
/// Carries the rejected item so the caller keeps ownership instead of losing
/// it inside the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("store is full")]
pub struct FullError<T> {
    /// The item the store refused to accept.
    pub item: T,
}

impl<T> FullError<T> {
    /// Recovers the rejected item.
    pub fn into_item(self) -> T {
        self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::ZeroCapacity.to_string(), "capacity must be non-zero");
        assert_eq!(
            StoreError::CapacityNotPowerOfTwo(12).to_string(),
            "masked indexing requires a power-of-two capacity, got 12"
        );
        assert_eq!(FullError { item: 7 }.to_string(), "store is full");
    }

    #[test]
    fn test_full_error_returns_item() {
        let err = FullError { item: String::from("rejected") };
        assert_eq!(err.into_item(), "rejected");
    }
}
