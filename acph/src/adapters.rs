// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convenience builders and finders over common key shapes.
//!
//! Every adapter here reduces to [`crate::build_bytes()`] over a byte
//! image of the caller's native values — there is no second algorithm.

use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::ffi::CStr;

use crate::build::build_bytes;
use crate::errors::DuplicateKeyError;
use crate::tree::AcphTree;

/// Builds a tree over NUL-terminated C strings, keyed on their bytes
/// excluding the terminator.
///
/// # Example
///
/// ```
/// use std::ffi::CStr;
/// use acph::build_strings;
///
/// let a = CStr::from_bytes_with_nul(b"one\0").unwrap();
/// let b = CStr::from_bytes_with_nul(b"two\0").unwrap();
/// let tree = build_strings(&[a, b], &[1u8, 2]).unwrap();
/// assert_eq!(tree.find(a.to_bytes()), Some(1));
/// ```
#[cfg(feature = "std")]
pub fn build_strings<P: Copy>(
    strings: &[&CStr],
    payloads: &[P],
) -> Result<AcphTree<P>, DuplicateKeyError> {
    let keys: Vec<&[u8]> = strings.iter().map(|s| s.to_bytes()).collect();
    build_bytes(&keys, payloads)
}

/// Looks up a C string built by [`build_strings()`].
#[cfg(feature = "std")]
pub fn find_string<P: Copy>(tree: &AcphTree<P>, string: &CStr) -> Option<P> {
    tree.find(string.to_bytes())
}

/// Builds a tree over 64-bit signed integers.
///
/// Keys are the integer's *native-endian* byte representation
/// (`i64::to_ne_bytes`). A tree built on one machine's endianness must be
/// looked up with [`find_int64()`] on a machine of the same endianness —
/// ACPH never normalizes byte order, matching [`build_double()`].
pub fn build_int64<P: Copy>(ints: &[i64], payloads: &[P]) -> Result<AcphTree<P>, DuplicateKeyError> {
    let images: Vec<[u8; 8]> = ints.iter().map(|v| v.to_ne_bytes()).collect();
    let keys: Vec<&[u8]> = images.iter().map(|image| image.as_slice()).collect();
    build_bytes(&keys, payloads)
}

/// Looks up a 64-bit signed integer built by [`build_int64()`].
pub fn find_int64<P: Copy>(tree: &AcphTree<P>, value: i64) -> Option<P> {
    tree.find(&value.to_ne_bytes())
}

/// Builds a tree over IEEE-754 double-precision floats.
///
/// Keys are the float's *native-endian* byte representation
/// (`f64::to_ne_bytes`), with the same cross-machine caveat as
/// [`build_int64()`]. `NaN` payloads compare by bit pattern, not by
/// floating-point equality: two different NaN bit patterns are treated as
/// distinct keys, and `-0.0`/`0.0` are also distinct keys despite
/// comparing equal under `==`.
pub fn build_double<P: Copy>(
    doubles: &[f64],
    payloads: &[P],
) -> Result<AcphTree<P>, DuplicateKeyError> {
    let images: Vec<[u8; 8]> = doubles.iter().map(|v| v.to_ne_bytes()).collect();
    let keys: Vec<&[u8]> = images.iter().map(|image| image.as_slice()).collect();
    build_bytes(&keys, payloads)
}

/// Looks up a double built by [`build_double()`].
pub fn find_double<P: Copy>(tree: &AcphTree<P>, value: f64) -> Option<P> {
    tree.find(&value.to_ne_bytes())
}

/// Builds a tree keyed on single bytes, one column wide.
///
/// Infallible: a duplicate byte simply takes the payload of its last
/// occurrence in `bytes`, rather than reporting [`DuplicateKeyError`].
/// This is the one adapter without a direct counterpart in
/// [`build_bytes()`]'s duplicate-rejecting semantics — single-byte keys
/// are common enough (dispatch tables keyed on an opcode or tag byte)
/// to be worth a last-write-wins shortcut instead of forcing callers to
/// deduplicate first.
///
/// # Example
///
/// ```
/// use acph::build_single_byte_column;
///
/// let tree = build_single_byte_column(&[b'a', b'b', b'a'], &[1u8, 2, 3]);
/// assert_eq!(tree.find(b"a"), Some(3));
/// assert_eq!(tree.find(b"b"), Some(2));
/// ```
pub fn build_single_byte_column<P: Copy>(bytes: &[u8], payloads: &[P]) -> AcphTree<P> {
    assert_eq!(
        bytes.len(),
        payloads.len(),
        "bytes and payloads must have the same length"
    );
    let mut last: [Option<P>; 256] = [None; 256];
    for (&byte, &payload) in bytes.iter().zip(payloads.iter()) {
        last[byte as usize] = Some(payload);
    }
    let mut keys: Vec<[u8; 1]> = Vec::new();
    let mut unique_payloads: Vec<P> = Vec::new();
    for (value, slot) in last.iter().enumerate() {
        if let Some(payload) = slot {
            keys.push([value as u8]);
            unique_payloads.push(*payload);
        }
    }
    let key_slices: Vec<&[u8]> = keys.iter().map(|k| k.as_slice()).collect();
    build_bytes(&key_slices, &unique_payloads)
        .expect("deduplicated single-byte keys are pairwise distinct by construction")
}
