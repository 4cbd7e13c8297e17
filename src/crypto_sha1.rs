use std::fmt;
use std::hash::Hasher;

use ::sha1::{Digest as _, Sha1};

use crate::digest::{Digest, SIZE};
use crate::hash::Algorithm;

/// SHA-1 tree algorithm.
#[derive(Clone, Default)]
pub struct Sha1Algorithm(Sha1);

impl Sha1Algorithm {
    /// Creates an algorithm with empty state.
    pub fn new() -> Sha1Algorithm {
        Sha1Algorithm(Sha1::new())
    }

    fn finalize(&self) -> Digest {
        let mut h = [0u8; SIZE];
        h.copy_from_slice(self.0.clone().finalize().as_slice());
        Digest::new(h)
    }
}

impl fmt::Debug for Sha1Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Sha1Algorithm")
    }
}

impl Hasher for Sha1Algorithm {
    #[inline]
    fn write(&mut self, msg: &[u8]) {
        self.0.update(msg)
    }

    #[inline]
    fn finish(&self) -> u64 {
        let mut head = [0u8; 8];
        head.copy_from_slice(&self.finalize().as_bytes()[..8]);
        u64::from_be_bytes(head)
    }
}

impl Algorithm<Digest> for Sha1Algorithm {
    #[inline]
    fn hash(&mut self) -> Digest {
        self.finalize()
    }

    #[inline]
    fn reset(&mut self) {
        self.0 = Sha1::new();
    }
}
