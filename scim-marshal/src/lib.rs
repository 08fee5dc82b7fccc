#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
//! Decodes loosely-typed SCIM documents into strongly-typed records.
//!
//! The source is a [`Value`] tree, as produced by a JSON parser. The target is
//! any type deriving [`Scim`](macro@Scim). Each field binds to the key made of
//! its tag (or name) with the first character lower-cased, and is updated only
//! when that key is present and non-null in the source.
//!
//! ```
//! use scim_marshal::{Scim, decode, value};
//!
//! #[derive(Debug, Default, Scim)]
//! #[scim(rename_all = "camelCase")]
//! struct User {
//!     user_name: String,
//!     active: bool,
//!     emails: Vec<Email>,
//! }
//!
//! #[derive(Debug, Default, Scim)]
//! struct Email {
//!     value: String,
//!     primary: bool,
//! }
//!
//! let source = value!({
//!     "userName": "bjensen",
//!     "active": true,
//!     "emails": [{ "value": "bjensen@example.com", "primary": true }]
//! });
//!
//! let mut user = User::default();
//! decode(source.as_object().unwrap(), &mut user).unwrap();
//! assert_eq!(user.user_name, "bjensen");
//! assert_eq!(user.emails[0].value, "bjensen@example.com");
//! ```
//!
//! # Hooks
//!
//! A type marked `#[scim(decode_self)]` implements [`DecodeSelf`] and owns its
//! decoding wherever it appears. A type marked `#[scim(identifier)]`
//! implements [`DecodeIdentifier`] and converts scalar sources of a different
//! concrete type, e.g. a string into a `uuid::Uuid`.
//!
//! # Errors
//!
//! Decoding does not stop at a failing field. Sibling fields keep decoding and
//! each record level reports one error, the last one by default (see
//! [`ErrorPolicy`]). Fields decoded before a failure stay written.
//!
//! # Numeric conversions
//!
//! Numbers convert between widths with Rust `as` semantics and no range
//! checks: integers wrap, floats saturate, NaN becomes zero.

extern crate self as scim_marshal;

pub use scim_core::*;
pub use scim_macros::Scim;
pub use scim_value::{Number, Object, Value, ValueKind, value};

mod error;
pub use error::*;

mod options;
pub use options::*;

pub mod fields;

mod coerce;
mod decoder;
mod hooks;
mod init;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use {debug, trace};

use decoder::Decoder;

/// Decodes `source` into `target` with default options.
///
/// `target` is the caller's own, already usable value: it is not reset or
/// initialized. Nested values the decoder allocates (records, optionals,
/// list elements) are initialized before they are decoded into.
///
/// Keys absent from `source`, and keys mapped to null, leave their fields
/// unchanged.
///
/// # Errors
///
/// [`DecodeErrorKind::InvalidTarget`] if `target` cannot be decoded from a
/// mapping at all. Otherwise the error recorded for the root level, after
/// every field was attempted.
pub fn decode(source: &Object, target: &mut dyn Slot) -> Result<()> {
    decode_with(source, target, &DecodeOptions::default())
}

/// Decodes `source` into `target` with the given options.
///
/// See [`decode`].
pub fn decode_with(source: &Object, target: &mut dyn Slot, options: &DecodeOptions) -> Result<()> {
    let shape = target.shape();
    if !shape.accepts_object() {
        return Err(DecodeError::new(DecodeErrorKind::InvalidTarget { shape }));
    }
    debug!("decoding {} keys into {shape}", source.len());
    Decoder::new(options).decode_object(source, target)
}

/// Decodes a new `T`, starting from `T::default()`.
///
/// ```
/// use scim_marshal::{Scim, from_value, value};
///
/// #[derive(Default, Scim)]
/// struct Name {
///     #[scim(rename = "givenName")]
///     given: String,
/// }
///
/// let name: Name = from_value(&value!({ "givenName": "Barbara" })).unwrap();
/// assert_eq!(name.given, "Barbara");
/// ```
///
/// # Errors
///
/// [`DecodeErrorKind::TypeMismatch`] if `source` is not an object, and
/// everything [`decode`] reports.
pub fn from_value<T: Scim>(source: &Value) -> Result<T> {
    from_value_with(source, &DecodeOptions::default())
}

/// Decodes a new `T` with the given options. See [`from_value`].
pub fn from_value_with<T: Scim>(source: &Value, options: &DecodeOptions) -> Result<T> {
    let mut target = T::default();
    match source {
        Value::Object(object) => decode_with(object, &mut target, options)?,
        other => return Err(DecodeError::mismatch(T::SHAPE, other.natural_type())),
    }
    Ok(target)
}
