use crate::digest::Digest;
use crate::hash::Algorithm;

/// A node of the tree.
///
/// The variant set is closed: a leaf over real data, the padding sentinel
/// used to even out a level, or an interior node owning two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Leaf wrapping one block of input data.
    Leaf(Leaf),
    /// Padding leaf, digest is [`Digest::ZERO`].
    Padding,
    /// Interior node.
    Internal(Box<InternalNode>),
}

impl Node {
    /// Creates a leaf node over `data`, hashed with `A`.
    pub fn leaf<A: Algorithm<Digest>>(data: impl Into<Vec<u8>>) -> Node {
        Node::Leaf(Leaf::new::<A>(data))
    }

    /// Returns the digest of this node.
    pub fn digest(&self) -> Digest {
        match self {
            Node::Leaf(leaf) => leaf.digest(),
            Node::Padding => Digest::ZERO,
            Node::Internal(node) => node.digest(),
        }
    }

    /// Recomputes the digest of this node from the leaf data up, ignoring
    /// every digest cached in the subtree.
    pub fn recompute_digest<A: Algorithm<Digest>>(&self) -> Digest {
        match self {
            Node::Leaf(leaf) => leaf.recompute_digest::<A>(),
            Node::Padding => Digest::ZERO,
            Node::Internal(node) => node.recompute_digest::<A>(),
        }
    }

    /// Returns `true` for the padding sentinel.
    pub fn is_padding(&self) -> bool {
        matches!(self, Node::Padding)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<InternalNode> for Node {
    fn from(node: InternalNode) -> Self {
        Node::Internal(Box::new(node))
    }
}

/// Leaf over one block of data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    data: Vec<u8>,
    digest: Digest,
}

impl Leaf {
    /// Creates the leaf and hashes `data` with `A`.
    pub fn new<A: Algorithm<Digest>>(data: impl Into<Vec<u8>>) -> Leaf {
        let data = data.into();
        let digest = A::default().leaf(data.as_slice());
        Leaf { data, digest }
    }

    /// Original block data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Block data as text, invalid UTF-8 sequences replaced.
    pub fn data_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// Returns `hash(data)`.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    fn recompute_digest<A: Algorithm<Digest>>(&self) -> Digest {
        A::default().leaf(self.data.as_slice())
    }
}

/// Interior node with exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode {
    left: Node,
    right: Node,
    digest: Digest,
}

impl InternalNode {
    /// Joins two children, hashing `left || right` with `A`.
    pub fn new<A: Algorithm<Digest>>(left: Node, right: Node) -> InternalNode {
        let digest = A::default().node(left.digest(), right.digest());
        InternalNode {
            left,
            right,
            digest,
        }
    }

    /// Left child.
    pub fn left(&self) -> &Node {
        &self.left
    }

    /// Right child.
    pub fn right(&self) -> &Node {
        &self.right
    }

    /// Returns `hash(left.digest || right.digest)`.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// Recomputes the digest of the whole subtree without using any cached
    /// digest.
    pub fn recompute_digest<A: Algorithm<Digest>>(&self) -> Digest {
        A::default().node(
            self.left.recompute_digest::<A>(),
            self.right.recompute_digest::<A>(),
        )
    }

    /// Checks every cached digest of the subtree against its recomputation.
    pub fn verify<A: Algorithm<Digest>>(&self) -> bool {
        let children_ok = [&self.left, &self.right].into_iter().all(|child| match child {
            Node::Leaf(leaf) => leaf.digest == leaf.recompute_digest::<A>(),
            Node::Padding => true,
            Node::Internal(node) => node.verify::<A>(),
        });

        children_ok && self.digest == A::default().node(self.left.digest(), self.right.digest())
    }
}
