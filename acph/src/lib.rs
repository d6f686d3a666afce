// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive columnar perfect hashing (ACPH) over a static set of byte-string
//! keys.
//!
//! Given `N` distinct keys and their payloads, [`build_bytes()`] builds a
//! small tree whose interior nodes discriminate on a single byte position of
//! the key using a per-node perfect hash. Lookup ([`AcphTree::find()`]) is
//! deterministic and branch-light: it follows one slot per node and never
//! allocates.
//!
//! # What this crate is not
//!
//! ACPH is not an incremental dictionary. Keys cannot be inserted or removed
//! once a tree is built, there is no resizing, and there is no on-disk form.
//! Lookup provides no ordering, and no prefix or range queries. The
//! byte-hash kernel is keyed by a small prime, not a cryptographic hash; do
//! not build a tree over adversarially chosen keys without a pre-hashing
//! layer.
//!
//! # Example
//!
//! ```
//! use acph::prelude::*;
//!
//! let keys: [&[u8]; 3] = [b"Mr Smith", b"Mr Jones", b"Ms Leonard"];
//! let payloads = [0u32, 1, 2];
//! let tree = build_bytes(&keys, &payloads).unwrap();
//!
//! assert_eq!(tree.find(b"Mr Jones"), Some(1));
//! assert_eq!(tree.find(b"Mr Smyth"), None);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(feature = "unsafe"), forbid(unsafe_code))]

extern crate alloc;

mod adapters;
mod build;
mod column;
mod errors;
mod kernel;
mod macros;
mod node;
mod primes;
mod selector;
mod tree;

pub use adapters::{build_double, build_int64, build_single_byte_column, find_double, find_int64};
#[cfg(feature = "std")]
pub use adapters::{build_strings, find_string};
pub use build::build_bytes;
pub use errors::DuplicateKeyError;
pub use tree::{AcphTree, Efficiency};

/// The recommended set of names to import.
///
/// Pulls in the tree type, the error type, and the byte-slice builder,
/// which covers the overwhelming majority of uses. The integer, double,
/// C-string and single-byte-column adapters are deliberately left out of
/// the prelude: their names (`build_int64`, `build_double`, ...) are
/// already unambiguous at the call site, and lumping them in here would
/// just shadow-import things most callers never use.
pub mod prelude {
    pub use super::{build_bytes, AcphTree, DuplicateKeyError};
}
