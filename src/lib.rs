//! Binary _Merkle Tree_ over an ordered sequence of data blocks.
//!
//! The tree is an owned structure of nodes rather than a flat vec: every
//! interior node owns its two children, so the tree can be walked and
//! printed with the original block data next to the leaf digests.
//! Hashing is specialized by an [`Algorithm`](hash::Algorithm), which
//! extends `std::hash::Hasher`, so the digest function is pluggable.
//! SHA-1 is the default algorithm.
//!
//! Digests are plain hashes of the underlying bytes, no RFC 6962 style
//! prefixes are mixed in:
//!
//! ```text
//! leaf(d)       = ALG(d)
//! node(l, r)    = ALG(l || r)
//! padding       = 0x00 * 20
//! ```
//!
//! A level with an odd number of nodes has its last node paired with
//! a padding leaf, which is always the right child. Levels are reduced
//! bottom-up until a single root remains, so even a single block yields
//! a root with one real child and one padding child.
//!
//! ```text
//!             root = h(h12 + h3p)
//!            /                  \
//!   h12 = h(h1 + h2)      h3p = h(h3 + 0)
//!    /          \          /          \
//! h1 = h(a)  h2 = h(b)  h3 = h(c)    padding
//! ```
//!
//! # Interface
//!
//! ```text
//! - build (leafs) -> root
//! - render (root) -> lines
//! ```
//!
//! # Quick start
//!
//! ```
//! use merkle_blocks::merkle::MerkleTree;
//! use merkle_blocks::crypto_sha1::Sha1Algorithm;
//!
//! let t = MerkleTree::<Sha1Algorithm>::from_blocks(["a", "b", "c"]).unwrap();
//! assert_eq!(t.leafs(), 3);
//! assert_eq!(t.height(), 2);
//! println!("{}", t);
//! ```

#![deny(
    missing_docs,
    unused_qualifications,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

/// Fixed size digest produced by the tree algorithms.
pub mod digest;

/// Errors reported while building a tree.
pub mod error;

/// Hash infrastructure for items in Merkle tree.
pub mod hash;

/// Common implementations for [`hash::Hashable`].
mod hash_impl;

/// Tree nodes: leafs, padding and interior nodes.
pub mod node;

/// Merkle tree abstractions, implementation and algorithms.
pub mod merkle;

/// Depth first tree rendering.
pub mod printer;

/// SHA-1 [`hash::Algorithm`] backed by the `sha1` crate.
pub mod crypto_sha1;

/// SHA-1 [`hash::Algorithm`] backed by `ring`.
#[cfg(feature = "ring")]
pub mod ring_sha1;

pub use digest::Digest;
pub use error::TreeError;
pub use merkle::MerkleTree;
pub use node::{InternalNode, Leaf, Node};

/// Shared test helpers.
#[cfg(test)]
mod test_common;


/// Tests XOR160.
#[cfg(test)]
mod test_xor160;
