// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests: [`crate::build`].

#![cfg(test)]

use super::{build_bytes, build_node};
use crate::node::Slot;

#[test]
fn empty_input_builds_empty_tree() {
    let tree = build_bytes::<u8>(&[], &[]).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.find(b"anything"), None);
}

#[test]
fn single_key_builds_one_leaf() {
    let keys: [&[u8]; 1] = [b"alpha"];
    let tree = build_bytes(&keys, &[7u8]).unwrap();
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.find(b"alpha"), Some(7));
    assert_eq!(tree.find(b"beta"), None);
}

#[test]
fn single_empty_key_builds_one_leaf() {
    let keys: [&[u8]; 1] = [b""];
    let tree = build_bytes(&keys, &[1u8]).unwrap();
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.find(b""), Some(1));
}

#[test]
fn duplicate_keys_are_rejected() {
    let keys: [&[u8]; 3] = [b"same", b"same", b"other"];
    let err = build_bytes(&keys, &[0u8, 1, 2]).unwrap_err();
    let _ = err;
}

#[test]
fn duplicate_empty_keys_are_rejected() {
    let keys: [&[u8]; 2] = [b"", b""];
    assert!(build_bytes(&keys, &[0u8, 1]).is_err());
}

#[test]
fn sharing_a_prefix_recurses_into_a_branch() {
    // No single column separates all four keys: column 0 only splits
    // {"AA","AB"} from {"BA","BB"}, and column 1 only splits by second
    // byte within a first-byte group. Whichever column the root picks,
    // at least one of its slots still holds two keys, so the root must
    // be built with a real `Slot::Branch`, not resolve everything as
    // leaves in one step.
    let keys: [&[u8]; 4] = [b"AA", b"AB", b"BA", b"BB"];
    let root = build_node(&keys, &[10u8, 20, 30, 40]).unwrap();
    let has_branch = root
        .slots
        .iter()
        .any(|slot| matches!(slot, Slot::Branch { .. }));
    assert!(has_branch, "root should need to recurse, not resolve every key as a leaf");
    drop(root);

    let tree = build_bytes(&keys, &[10u8, 20, 30, 40]).unwrap();
    assert_eq!(tree.find(b"AA"), Some(10));
    assert_eq!(tree.find(b"AB"), Some(20));
    assert_eq!(tree.find(b"BA"), Some(30));
    assert_eq!(tree.find(b"BB"), Some(40));
    assert_eq!(tree.find(b"AC"), None);
    assert_eq!(tree.find(b"A"), None);
}

#[test]
fn many_keys_all_resolve_uniquely() {
    let owned: alloc::vec::Vec<alloc::string::String> = (0u32..500)
        .map(|i| alloc::format!("key-{i:04}"))
        .collect();
    let keys: alloc::vec::Vec<&[u8]> = owned.iter().map(|s| s.as_bytes()).collect();
    let payloads: alloc::vec::Vec<u32> = (0u32..500).collect();
    let tree = build_bytes(&keys, &payloads).unwrap();
    for (key, payload) in keys.iter().zip(payloads.iter()) {
        assert_eq!(tree.find(key), Some(*payload));
    }
    assert_eq!(tree.find(b"not-present"), None);
}

#[test]
fn mismatched_lengths_panic() {
    let result = std::panic::catch_unwind(|| {
        let keys: [&[u8]; 1] = [b"a"];
        let _ = build_bytes(&keys, &[1u8, 2u8]);
    });
    assert!(result.is_err());
}
