//! String interner backing [`Name`].
//!
//! Interned strings live for the rest of the process, which keeps lookup
//! borrow-free and lets [`Name`] stay a plain `u32`. A compiler session
//! interns a bounded set of identifiers and paths, so the leak is the
//! arena.

use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// The interner exceeded `u32::MAX` distinct strings.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {} strings, max is {}",
                count,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct Inner {
    /// Map from string content to index in `strings`.
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
///
/// O(1) interning and lookup. Wrap in [`SharedInterner`] to share across
/// compilation phases.
pub struct StringInterner {
    inner: RwLock<Inner>,
}

/// Interner handle shared between compilation phases.
pub type SharedInterner = Arc<StringInterner>;

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at
    /// [`Name::EMPTY`].
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringInterner {
            inner: RwLock::new(Inner {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Try to intern a string, returning its [`Name`] or an error on
    /// overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned.
        {
            let guard = self.inner.read();
            if let Some(&index) = guard.map.get(s) {
                return Ok(Name::from_raw(index));
            }
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring the write lock.
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;

        // Leak to get a 'static borrow; the interner is the arena.
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);

        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its [`Name`].
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` distinct strings.
    /// Use [`try_intern`](Self::try_intern) for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Resolve a [`Name`] back to its string.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    #[inline]
    pub fn lookup(&self, name: Name) -> &'static str {
        self.inner.read().strings[name.raw() as usize]
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Whether the interner holds only the pre-interned empty string.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_dedups() {
        let interner = StringInterner::new();
        let a = interner.intern("foo");
        let b = interner.intern("foo");
        let c = interner.intern("bar");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn lookup_roundtrip() {
        let interner = StringInterner::new();
        let name = interner.intern("main.vela");
        assert_eq!(interner.lookup(name), "main.vela");
    }

    #[test]
    fn empty_string_is_pre_interned() {
        let interner = StringInterner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn shared_across_threads() {
        let interner: SharedInterner = Arc::new(StringInterner::new());
        let handle = {
            let interner = Arc::clone(&interner);
            std::thread::spawn(move || interner.intern("thread"))
        };
        let from_thread = handle.join().unwrap_or_else(|_| panic!("thread panicked"));
        assert_eq!(from_thread, interner.intern("thread"));
    }

    #[test]
    fn len_counts_distinct() {
        let interner = StringInterner::new();
        interner.intern("a");
        interner.intern("b");
        interner.intern("a");
        assert_eq!(interner.len(), 3); // "", "a", "b"
    }
}
