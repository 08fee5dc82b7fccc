use core::fmt;

use crate::{HookError, Shape};

/// A segment in a decode path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A record field, by its external key
    Field(String),
    /// An entry in a string-keyed map
    Key(String),
    /// An index in a list
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Key(key) => write!(f, "[{key:?}]"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// The hook a type declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// [`DecodeSelf`](crate::DecodeSelf)
    DecodeSelf,
    /// [`DecodeIdentifier`](crate::DecodeIdentifier)
    DecodeIdentifier,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::DecodeSelf => "DecodeSelf",
            Capability::DecodeIdentifier => "DecodeIdentifier",
        })
    }
}

/// Error returned by [`decode`](crate::decode) and friends.
#[derive(Debug)]
pub struct DecodeError {
    /// The specific kind of error
    pub kind: DecodeErrorKind,
    /// Path through the source mapping where the error occurred
    pub path: Vec<PathSegment>,
}

impl DecodeError {
    /// Create a new error at the root.
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    /// Add a path segment (prepends since we unwind from the error site).
    pub fn with_path(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    /// Format the path as a string, `<root>` when empty.
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            return "<root>".into();
        }
        let mut s = String::new();
        for seg in &self.path {
            use fmt::Write;
            let _ = write!(s, "{seg}");
        }
        s
    }

    pub(crate) fn mismatch(expected: &'static Shape, got: &'static str) -> Self {
        Self::new(DecodeErrorKind::TypeMismatch { expected, got })
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "at {}: {}", self.path_string(), self.kind)
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            DecodeErrorKind::DelegatedFailure { error, .. } => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// What went wrong.
#[derive(Debug)]
pub enum DecodeErrorKind {
    /// The root target cannot be decoded from a mapping at all.
    InvalidTarget {
        /// Shape of the target
        shape: &'static Shape,
    },

    /// The source value's kind or concrete type cannot be written into the
    /// target, and no conversion or hook applies.
    TypeMismatch {
        /// Shape of the target
        expected: &'static Shape,
        /// Natural concrete type of the source value (`String`, `u64`, `Object`, ...)
        got: &'static str,
    },

    /// A shape declared a hook, but its slot did not hand one out.
    CapabilityAssertionFailed {
        /// Shape that declared the hook
        shape: &'static Shape,
        /// The hook that was declared
        capability: Capability,
    },

    /// A hook reported failure; its error is kept unmodified.
    DelegatedFailure {
        /// Shape whose hook failed
        shape: &'static Shape,
        /// The hook that failed
        capability: Capability,
        /// What the hook returned
        error: HookError,
    },

    /// A source list is longer than [`DecodeOptions::max_sequence_len`](crate::DecodeOptions::max_sequence_len).
    LimitExceeded {
        /// Length of the source list
        len: usize,
        /// Configured maximum
        max: usize,
    },
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::InvalidTarget { shape } => {
                write!(f, "invalid target: {shape} cannot be decoded from a mapping")
            }
            DecodeErrorKind::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: got {got}, want {expected}")
            }
            DecodeErrorKind::CapabilityAssertionFailed { shape, capability } => {
                write!(f, "{shape} declares {capability} but does not implement it")
            }
            DecodeErrorKind::DelegatedFailure {
                shape,
                capability,
                error,
            } => write!(f, "{capability} for {shape} failed: {error}"),
            DecodeErrorKind::LimitExceeded { len, max } => {
                write!(f, "list of {len} elements exceeds the limit of {max}")
            }
        }
    }
}

/// Result type for decoding.
pub type Result<T> = core::result::Result<T, DecodeError>;
