use crate::digest::Digest;
use crate::hash::Hashable;
use std::hash::Hasher;

// Byte containers are written raw: no length prefix, no terminator, so a
// leaf over `b"abc"` hashes exactly like the string "abc".

impl<H: Hasher> Hashable<H> for [u8] {
    fn hash(&self, state: &mut H) {
        state.write(self)
    }
}

impl<H: Hasher, const N: usize> Hashable<H> for [u8; N] {
    fn hash(&self, state: &mut H) {
        state.write(&self[..])
    }
}

impl<H: Hasher> Hashable<H> for Vec<u8> {
    fn hash(&self, state: &mut H) {
        state.write(self.as_slice())
    }
}

impl<H: Hasher> Hashable<H> for str {
    fn hash(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl<H: Hasher> Hashable<H> for String {
    fn hash(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl<H: Hasher> Hashable<H> for Digest {
    fn hash(&self, state: &mut H) {
        state.write(self.as_ref())
    }
}

impl<'a, H: Hasher, T: ?Sized + Hashable<H>> Hashable<H> for &'a T {
    fn hash(&self, state: &mut H) {
        (**self).hash(state);
    }
}
