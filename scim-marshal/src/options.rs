/// Which error a record level reports when several of its fields fail.
///
/// Decoding never stops at the first failing field: sibling fields still
/// decode, and one error is surfaced per record level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// The last error recorded wins. This is the historical behavior.
    #[default]
    LastWins,
    /// The first error recorded wins.
    FirstWins,
}

/// Options for [`decode_with`](crate::decode_with).
#[derive(Clone, Debug, Default)]
pub struct DecodeOptions {
    error_policy: ErrorPolicy,
    max_sequence_len: Option<usize>,
}

impl DecodeOptions {
    /// Create a new `DecodeOptions` with default settings: last error wins,
    /// no bound on list lengths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which of several field errors is reported.
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Reject source lists longer than `max` elements.
    ///
    /// List lengths come straight from the source document; set this when
    /// decoding untrusted input.
    ///
    /// # Example
    ///
    /// ```
    /// use scim_marshal::{DecodeErrorKind, DecodeOptions, Scim, decode_with, value};
    ///
    /// #[derive(Default, Scim)]
    /// struct Group {
    ///     members: Vec<String>,
    /// }
    ///
    /// let source = value!({ "members": ["a", "b", "c"] });
    /// let source = source.as_object().unwrap();
    ///
    /// let mut group = Group::default();
    /// let err = decode_with(source, &mut group, &DecodeOptions::new().max_sequence_len(2))
    ///     .unwrap_err();
    /// assert!(matches!(err.kind, DecodeErrorKind::LimitExceeded { len: 3, max: 2 }));
    /// ```
    pub fn max_sequence_len(mut self, max: usize) -> Self {
        self.max_sequence_len = Some(max);
        self
    }

    pub(crate) fn policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub(crate) fn sequence_limit(&self) -> Option<usize> {
        self.max_sequence_len
    }
}
