use crate::digest::{Digest, SIZE};
use crate::hash::Algorithm;
use crate::node::{InternalNode, Node};
use std::fmt;
use std::hash::Hasher;

/// Toy algorithm xoring the input stream into a 20 byte state. Interior
/// node digests come out as `left ^ right`, which makes expected values
/// easy to compute by hand.
#[derive(Debug, Copy, Clone, Default)]
pub struct XOR160 {
    data: [u8; SIZE],
    i: usize,
}

impl XOR160 {
    pub fn new() -> XOR160 {
        XOR160 {
            data: [0; SIZE],
            i: 0,
        }
    }
}

impl Hasher for XOR160 {
    fn write(&mut self, bytes: &[u8]) {
        for x in bytes {
            self.data[self.i % SIZE] ^= *x;
            self.i += 1;
        }
    }

    fn finish(&self) -> u64 {
        unimplemented!()
    }
}

impl Algorithm<Digest> for XOR160 {
    #[inline]
    fn hash(&mut self) -> Digest {
        Digest::new(self.data)
    }

    #[inline]
    fn reset(&mut self) {
        *self = XOR160::new();
    }
}

impl fmt::UpperHex for XOR160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&Digest::new(self.data), f)
    }
}

/// Plain SHA-1 of `data`, computed without the tree algorithm.
pub fn sha1(data: &[u8]) -> Digest {
    use ::sha1::{Digest as _, Sha1};

    let mut h = [0u8; SIZE];
    h.copy_from_slice(Sha1::digest(data).as_slice());
    Digest::new(h)
}

/// `sha1(left || right)`.
pub fn sha1_pair(left: Digest, right: Digest) -> Digest {
    let mut buf = Vec::with_capacity(2 * SIZE);
    buf.extend_from_slice(left.as_ref());
    buf.extend_from_slice(right.as_ref());
    sha1(&buf)
}

pub fn leafs<A: Algorithm<Digest>>(data: &[&str]) -> Vec<Node> {
    data.iter().map(|d| Node::leaf::<A>(*d)).collect()
}

/// Counts (interior nodes, leafs, padding leafs) of the subtree.
pub fn count_nodes(node: &InternalNode) -> (usize, usize, usize) {
    let mut counts = (1, 0, 0);
    for child in [node.left(), node.right()] {
        match child {
            Node::Internal(inner) => {
                let (i, l, p) = count_nodes(inner);
                counts.0 += i;
                counts.1 += l;
                counts.2 += p;
            }
            Node::Leaf(_) => counts.1 += 1,
            Node::Padding => counts.2 += 1,
        }
    }
    counts
}

pub fn as_internal(node: &Node) -> &InternalNode {
    match node {
        Node::Internal(inner) => inner,
        other => panic!("expected an interior node, got {:?}", other),
    }
}

pub fn leaf_data(node: &Node) -> &[u8] {
    match node {
        Node::Leaf(leaf) => leaf.data(),
        other => panic!("expected a leaf, got {:?}", other),
    }
}
