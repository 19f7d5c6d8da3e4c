use crate::{Result, error::range_error, types::resolve_range};
use rook_memory::Ptr;
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// The String type used by the Rook runtime
///
/// Strings are immutable byte sequences shared between owners, UTF-8 is expected but not
/// required. Ordering is lexicographic over the bytes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RString(Ptr<[u8]>);

impl RString {
    /// Allocates a new string containing a copy of the given bytes
    pub fn new(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }

    /// Returns the string's bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the string as `&str` if it contains valid UTF-8
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// The length of the string in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the string contains no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of owners of the string's allocation
    pub fn ref_count(&self) -> usize {
        Ptr::ref_count(&self.0)
    }

    /// Returns true if both strings share the same allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Ptr::ptr_eq(&self.0, &other.0)
    }

    /// Returns a new string containing `size` bytes from `start`
    ///
    /// Negative values for `start` or `size` are offsets from the end of the string.
    pub fn substring(&self, start: i64, size: i64) -> Result<Self> {
        match resolve_range(self.len(), start, size) {
            Some(range) => Ok(Self::new(&self.0[range])),
            None => range_error("values out of range"),
        }
    }
}

impl From<&str> for RString {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for RString {
    fn from(s: String) -> Self {
        Self(s.into_bytes().into())
    }
}

impl From<Vec<u8>> for RString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}

impl From<Ptr<[u8]>> for RString {
    fn from(bytes: Ptr<[u8]>) -> Self {
        Self(bytes)
    }
}

impl PartialEq<&str> for RString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for RString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl fmt::Display for RString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for RString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}
