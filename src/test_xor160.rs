#![cfg(test)]

use crate::crypto_sha1::Sha1Algorithm;
use crate::digest::Digest;
use crate::hash::*;
use crate::merkle::{build, MerkleTree};
use crate::node::Node;
use crate::test_common::*;
use std::hash::Hasher;

fn xor_of(blocks: &[&[u8]]) -> Digest {
    let mut h = XOR160::new();
    for b in blocks {
        h.write(b);
    }
    h.hash()
}

#[test]
fn test_hasher_simple() {
    let mut h = XOR160::new();
    "12345678901234567890".hash(&mut h);
    assert_eq!(
        format!("{:#X}", h),
        "0x3132333435363738393031323334353637383930"
    );
    h.reset();
    String::from("1234567890").hash(&mut h);
    String::from("1234567890").hash(&mut h);
    assert_eq!(
        format!("{:#X}", h),
        "0x3132333435363738393031323334353637383930"
    );
    String::from("12345678901234567890").hash(&mut h);
    assert_eq!(format!("{:#X}", h), format!("{:#X}", Digest::ZERO));
}

#[test]
fn test_custom_algorithm_tree() {
    let t: MerkleTree<XOR160> = MerkleTree::from_blocks(["a", "b", "c"]).unwrap();
    assert_eq!(t.height(), 2);

    // xor folds every real leaf into the root, padding contributes zero
    assert_eq!(t.root_digest(), xor_of(&[b"a", b"b", b"c"]));
    assert_eq!(t.root().left().digest(), xor_of(&[b"a", b"b"]));
    assert_eq!(t.root().right().digest(), xor_of(&[b"c"]));
    assert!(t.verify());
}

#[test]
fn test_single_leaf_custom_algorithm() {
    let root = build::<XOR160>(leafs::<XOR160>(&["abc"])).unwrap();
    assert_eq!(root.digest(), xor_of(&[b"abc"]));
    assert!(root.right().is_padding());
}

#[test]
fn test_verify_detects_foreign_algorithm() {
    let t: MerkleTree<XOR160> = MerkleTree::from_blocks(["a", "b", "c", "d"]).unwrap();
    assert!(t.root().verify::<XOR160>());
    assert!(!t.root().verify::<Sha1Algorithm>());
    assert_ne!(
        t.root().recompute_digest::<Sha1Algorithm>(),
        t.root_digest()
    );
}

#[test]
fn test_mixed_nodes() {
    // leafs hashed by one algorithm, joined by another
    let nodes = vec![
        Node::leaf::<Sha1Algorithm>("a"),
        Node::leaf::<Sha1Algorithm>("b"),
    ];
    let root = build::<XOR160>(nodes).unwrap();
    assert_eq!(root.digest(), xor_of(&[sha1(b"a").as_ref(), sha1(b"b").as_ref()]));
}
