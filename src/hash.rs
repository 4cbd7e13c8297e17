//! Hash infrastructure for items in Merkle Tree.

use std::hash::Hasher;

/// A hashable type.
///
/// Types implementing `Hashable` are able to be [`hash`]ed with an instance of
/// [`Hasher`]. Leaf data is fed into the tree [`Algorithm`] through this trait.
///
/// ## Implementing `Hashable`
///
/// ```text
/// use merkle_blocks::hash::Hashable;
///
/// struct Transaction {
///     id: u32,
///     payload: Vec<u8>,
/// }
///
/// /// where SHA1 : std::hash::Hasher
/// impl Hashable<SHA1> for Transaction {
///     fn hash(&self, state: &mut SHA1) {
///         self.id.hash(state);
///         self.payload.hash(state);
///     }
/// }
/// ```
///
/// ## `Hashable` and `Eq`
///
/// When implementing both `Hashable` and [`Eq`], it is important that the following
/// property holds:
///
/// ```text
/// k1 == k2 -> hash(k1) == hash(k2)
/// ```
///
/// [`hash`]: #tymethod.hash
pub trait Hashable<H: Hasher> {
    /// Feeds this value into the given [`Hasher`].
    fn hash(&self, state: &mut H);

    /// Feeds a slice of this type into the given [`Hasher`].
    fn hash_slice(data: &[Self], state: &mut H)
    where
        Self: Sized,
    {
        for piece in data {
            piece.hash(state);
        }
    }
}

/// Hashing algorithm type.
///
/// Algorithm conforms standard [`Hasher`] trait and provides methods to return
/// full length hash and reset current state.
///
/// Leafs and interior nodes are hashed without any domain separation
/// prefix: a leaf digest is the hash of its data and a node digest is the
/// hash of its children digests concatenated left to right.
pub trait Algorithm<T>: Hasher + Default
where
    T: AsRef<[u8]> + Copy + Ord,
{
    /// Returns the hash value for the data stream written so far.
    fn hash(&mut self) -> T;

    /// Reset Hasher state.
    fn reset(&mut self);

    /// Returns the hash value for MT leaf.
    fn leaf<O: Hashable<Self> + ?Sized>(&mut self, leaf: &O) -> T {
        self.reset();
        leaf.hash(self);
        self.hash()
    }

    /// Returns the hash value for MT interior node, `left || right`.
    fn node(&mut self, left: T, right: T) -> T {
        self.reset();
        self.write(left.as_ref());
        self.write(right.as_ref());
        self.hash()
    }
}
