use std::fmt;
use std::str::FromStr;

/// Size in bytes of a [`Digest`] (160 bit SHA-1 output).
pub const SIZE: usize = 20;

/// Fixed size output of the tree hash function.
///
/// Equality and ordering are byte-wise. `Display` renders lowercase hex.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digest([u8; SIZE]);

impl Digest {
    /// The all-zero digest carried by padding leafs. It is a sentinel and
    /// not the hash of any data.
    pub const ZERO: Digest = Digest([0u8; SIZE]);

    /// Wraps raw digest bytes.
    pub const fn new(bytes: [u8; SIZE]) -> Digest {
        Digest(bytes)
    }

    /// Creates the digest from its byte form. `None` if the slice is not
    /// exactly [`SIZE`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Option<Digest> {
        <[u8; SIZE]>::try_from(bytes).ok().map(Digest)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; SIZE] {
        &self.0
    }

    /// Returns `true` for the padding sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; SIZE]
    }

    /// Lowercase hexadecimal rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SIZE]> for Digest {
    fn from(bytes: [u8; SIZE]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; SIZE] {
    fn from(d: Digest) -> Self {
        d.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for b in self.0.iter() {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}

impl FromStr for Digest {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; SIZE];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Digest(bytes))
    }
}
