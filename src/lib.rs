//! Ringstore — a fixed-capacity circular store.
//!
//! [`RingStore`] keeps up to `capacity` items in a ring addressed by two
//! moving cursors, with logical index 0 always naming the oldest item.
//! Overwrite-on-full behavior, removal order preservation, and masked index
//! arithmetic are selected per store through [`StoreConfig`], so one binary
//! can mix policies freely.
//!
//! ```
//! use ringstore::{RingStore, StoreConfig};
//!
//! let mut recent = RingStore::new(3, StoreConfig::default()).unwrap();
//! recent.push("a").unwrap();
//! recent.push("b").unwrap();
//! recent.push("c").unwrap();
//! // Default policy: a full store evicts the oldest item on push.
//! assert_eq!(recent.push("d").unwrap(), Some("a"));
//! assert_eq!(recent.to_vec(), vec!["b", "c", "d"]);
//!
//! let (index, item) = recent.find(|s| s.starts_with('c')).unwrap();
//! assert_eq!((index, *item), (1, "c"));
//! ```
//!
//! Storage is either owned by the store or borrowed from the caller
//! ([`RingStore::with_buffer`]); borrowed storage is never freed by the
//! store. The store is single-threaded by design: no locking, no interior
//! mutability, and every returned reference is an ordinary borrow checked at
//! compile time.

mod config;
mod error;
mod iter;
mod store;

pub use config::{OverflowPolicy, RemovalPolicy, StoreConfig};
pub use error::{FullError, StoreError};
pub use iter::Iter;
pub use store::RingStore;
