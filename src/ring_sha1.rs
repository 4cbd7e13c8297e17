use std::fmt;
use std::hash::Hasher;

use ::ring::digest::{Context, SHA1_FOR_LEGACY_USE_ONLY};

use crate::digest::{Digest, SIZE};
use crate::hash::Algorithm;

/// SHA-1 tree algorithm on top of `ring`.
#[derive(Clone)]
pub struct RingSha1Algorithm(Context);

impl RingSha1Algorithm {
    /// Creates an algorithm with empty state.
    pub fn new() -> RingSha1Algorithm {
        RingSha1Algorithm(Context::new(&SHA1_FOR_LEGACY_USE_ONLY))
    }

    /// ring.Context is not reusable after finalization (finish(self)),
    /// so the state is cloned first.
    fn finalize(&self) -> Digest {
        let mut h = [0u8; SIZE];
        h.copy_from_slice(self.0.clone().finish().as_ref());
        Digest::new(h)
    }
}

impl Default for RingSha1Algorithm {
    fn default() -> RingSha1Algorithm {
        RingSha1Algorithm::new()
    }
}

impl fmt::Debug for RingSha1Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("RingSha1Algorithm")
    }
}

impl Hasher for RingSha1Algorithm {
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

impl Algorithm<Digest> for RingSha1Algorithm {
    #[inline]
    fn hash(&mut self) -> Digest {
        self.finalize()
    }

    #[inline]
    fn reset(&mut self) {
        self.0 = Context::new(&SHA1_FOR_LEGACY_USE_ONLY);
    }
}
