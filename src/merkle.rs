use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::digest::Digest;
use crate::error::{Result, TreeError};
use crate::hash::Algorithm;
use crate::node::{InternalNode, Node};
use crate::printer;

/// Merkle Tree.
///
/// A merkle tree is a tree in which every non-leaf node is the hash of its
/// children nodes. A diagram depicting how it works:
///
/// ```text
///         root = h1234 = h(h12 + h34)
///        /                           \
///  h12 = h(h1 + h2)            h34 = h(h3 + h4)
///   /            \              /            \
/// h1 = h(tx1)  h2 = h(tx2)    h3 = h(tx3)  h4 = h(tx4)
/// ```
///
/// The number of inputs is not always a power of two. A level with an odd
/// number of nodes pairs its last node with a padding leaf (zero digest)
/// as the right child. Padding is applied on every level independently,
/// so the tree over 5 leafs looks like:
///
/// ```text
///                       root
///              /                  \
///          h1234                  h5pp
///        /       \               /    \
///     h12         h34         h5p     padding
///    /   \       /   \       /   \
///  h1    h2    h3    h4    h5    padding
/// ```
///
/// The tree owns its nodes; any change of the input requires building a new
/// tree.
pub struct MerkleTree<A>
where
    A: Algorithm<Digest>,
{
    root: InternalNode,
    leafs: usize,
    height: usize,

    _a: PhantomData<A>,
}

impl<A: Algorithm<Digest>> MerkleTree<A> {
    /// Creates new merkle tree from a sequence of data blocks.
    pub fn from_blocks<I, B>(blocks: I) -> Result<MerkleTree<A>>
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        Self::from_nodes(blocks.into_iter().map(|b| Node::leaf::<A>(b)).collect())
    }

    /// Creates new merkle tree from an ordered sequence of nodes.
    pub fn from_nodes(leafs: Vec<Node>) -> Result<MerkleTree<A>> {
        let count = leafs.len();
        let (root, height) = build_with_height::<A>(leafs)?;
        debug_assert_eq!(height, get_merkle_tree_height(count));

        Ok(MerkleTree {
            root,
            leafs: count,
            height,
            _a: PhantomData,
        })
    }

    /// Returns merkle root node.
    pub fn root(&self) -> &InternalNode {
        &self.root
    }

    /// Returns merkle root digest.
    pub fn root_digest(&self) -> Digest {
        self.root.digest()
    }

    /// Returns original number of elements the tree was built upon.
    pub fn leafs(&self) -> usize {
        self.leafs
    }

    /// Returns the number of reduction levels executed to reach the root.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Checks every node digest against a recomputation from the leaf data.
    pub fn verify(&self) -> bool {
        self.root.verify::<A>()
    }

    /// Rendered tree lines, see [`printer::render`].
    pub fn lines(&self) -> Vec<String> {
        printer::render(&self.root)
    }

    /// Consumes the tree, returning its root node.
    pub fn into_root(self) -> InternalNode {
        self.root
    }
}

impl<A: Algorithm<Digest>> fmt::Debug for MerkleTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("root", &self.root.digest())
            .field("leafs", &self.leafs)
            .field("height", &self.height)
            .finish()
    }
}

impl<A: Algorithm<Digest>> fmt::Display for MerkleTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Builds the tree bottom-up from an ordered, non-empty sequence of nodes
/// and returns its root.
///
/// Each pass pairs adjacent nodes left to right into interior nodes; an odd
/// trailing node is paired with a padding leaf on the right. Passes repeat
/// until one node remains. A single input node still goes through one pass,
/// so the root is always an interior node.
pub fn build<A: Algorithm<Digest>>(leafs: Vec<Node>) -> Result<InternalNode> {
    build_with_height::<A>(leafs).map(|(root, _)| root)
}

fn build_with_height<A: Algorithm<Digest>>(leafs: Vec<Node>) -> Result<(InternalNode, usize)> {
    if leafs.is_empty() {
        return Err(TreeError::InvalidInput(
            "can not build a merkle tree from an empty leaf sequence".to_string(),
        ));
    }

    let mut height: usize = 1;
    let mut level = reduce::<A>(leafs, 0);
    while level.len() > 1 {
        let nodes = level.into_iter().map(Node::from).collect();
        level = reduce::<A>(nodes, height);
        height += 1;
    }

    // Every pass yields ceil(width / 2) >= 1 nodes, the loop leaves exactly one.
    match level.pop() {
        Some(root) => Ok((root, height)),
        None => Err(TreeError::InvalidInput(
            "reduction produced no root".to_string(),
        )),
    }
}

/// Pairs one level of nodes into the next one.
fn reduce<A: Algorithm<Digest>>(nodes: Vec<Node>, level: usize) -> Vec<InternalNode> {
    let width = nodes.len();
    let mut next = Vec::with_capacity(width.div_ceil(2));

    let mut iter = nodes.into_iter();
    while let Some(left) = iter.next() {
        // odd width, pad the last node
        let right = iter.next().unwrap_or(Node::Padding);
        next.push(InternalNode::new::<A>(left, right));
    }

    debug!(
        "level {}: reduced {} nodes into {}{}",
        level,
        width,
        next.len(),
        if width & 1 == 1 { " (padded)" } else { "" }
    );
    next
}

/// `next_pow2` returns next highest power of two from a given number if
/// it is not already a power of two. Zero maps to one.
///
/// [](http://locklessinc.com/articles/next_pow2/)
/// [](https://stackoverflow.com/questions/466204/rounding-up-to-next-power-of-2/466242#466242)
pub fn next_pow2(mut n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    n -= 1;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    #[cfg(target_pointer_width = "64")]
    {
        n |= n >> 32;
    }
    n + 1
}

/// find power of 2 of a number which is power of 2
pub fn log2_pow2(n: usize) -> usize {
    n.trailing_zeros() as usize
}

/// Number of reduction levels needed for `leafs` leafs: `ceil(log2(leafs))`,
/// but at least one, since a single leaf is still paired with padding.
pub fn get_merkle_tree_height(leafs: usize) -> usize {
    std::cmp::max(1, log2_pow2(next_pow2(leafs)))
}
