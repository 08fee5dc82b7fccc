use scim_value::{Object, Value};

/// Error type returned by decode hooks. The decoder passes it through
/// unmodified.
pub type HookError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// A type that decodes itself from a raw mapping.
///
/// Declared with `#[scim(decode_self)]`. Wherever the type appears, at the top
/// level or nested, the decoder hands it the source mapping verbatim and
/// returns its result; no generic field walking happens for it.
///
/// ```
/// use scim_core::{DecodeSelf, HookError};
/// use scim_value::{Object, Value};
///
/// #[derive(Default)]
/// struct Schemas(Vec<String>);
///
/// impl DecodeSelf for Schemas {
///     fn decode_self(&mut self, source: &Object) -> Result<(), HookError> {
///         self.0 = source.keys().cloned().collect();
///         Ok(())
///     }
/// }
/// ```
pub trait DecodeSelf {
    /// Decodes `source` into `self`.
    fn decode_self(&mut self, source: &Object) -> Result<(), HookError>;
}

/// A type that converts opaque identifier scalars itself.
///
/// Declared with `#[scim(identifier)]`. Used when a scalar source value's
/// natural type differs from the field's concrete type, e.g. a UUID carried
/// as a string on the wire and as a 128-bit value in memory.
pub trait DecodeIdentifier {
    /// Decodes `source` into `self`.
    fn decode_identifier(&mut self, source: &Value) -> Result<(), HookError>;
}
