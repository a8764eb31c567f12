use serde::{Deserialize, Serialize};

/// What `push` does when the store is already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Evict the oldest item to make room; `push` returns the evicted item.
    #[default]
    Overwrite,
    /// Refuse the push and hand the item back to the caller.
    Reject,
}

/// How `remove` closes the gap left by the removed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RemovalPolicy {
    /// Move the newest item into the gap. O(1), but the former last item now
    /// occupies the removed position.
    #[default]
    SwapWithLast,
    /// Shift every later item one position toward the tail. O(n), keeps the
    /// relative order of the remaining items.
    PreserveOrder,
}

/// Construction-time policy choices for a [`RingStore`](crate::RingStore).
///
/// One store value per instance, fixed for its lifetime, so a single binary
/// can hold stores with different policies side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Push-on-full behavior.
    #[serde(default)]
    pub overflow: OverflowPolicy,
    /// Single-item removal behavior.
    #[serde(default)]
    pub removal: RemovalPolicy,
    /// Map logical indices to physical slots with a bitmask instead of a
    /// remainder. Requires a power-of-two capacity; never changes observable
    /// behavior.
    #[serde(default)]
    pub masked_indexing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Overwrite,
            removal: RemovalPolicy::SwapWithLast,
            masked_indexing: false,
        }
    }
}

impl StoreConfig {
    /// Default policies with push-on-full rejection instead of eviction.
    pub fn rejecting() -> Self {
        Self { overflow: OverflowPolicy::Reject, ..Self::default() }
    }

    /// Default policies with order-preserving single-item removal.
    pub fn order_preserving() -> Self {
        Self { removal: RemovalPolicy::PreserveOrder, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = StoreConfig::default();
        assert_eq!(config.overflow, OverflowPolicy::Overwrite);
        assert_eq!(config.removal, RemovalPolicy::SwapWithLast);
        assert!(!config.masked_indexing);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = StoreConfig {
            overflow: OverflowPolicy::Reject,
            removal: RemovalPolicy::PreserveOrder,
            masked_indexing: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        // Simulate a config persisted before the indexing option existed
        let old_json = r#"{"overflow":"Reject"}"#;
        let config: StoreConfig = serde_json::from_str(old_json).unwrap();
        assert_eq!(config.overflow, OverflowPolicy::Reject);
        assert_eq!(config.removal, RemovalPolicy::SwapWithLast);
        assert!(!config.masked_indexing);
    }
}
