//! `scim-value` is the loosely-typed tree a SCIM document is parsed into
//! before it is decoded into a typed record.
//!
//! A [`Value`] is one of null, bool, number, string, an ordered array of
//! values, or an [`Object`] mapping string keys to values. The tree is
//! produced by some earlier parsing stage (a JSON parser, a fuzzer, a test
//! using the [`value!`] macro) and is only ever read by the decoder.
//!
//! ```
//! use scim_value::{Value, value};
//!
//! let user = value!({
//!     "userName": "bjensen",
//!     "active": true,
//!     "emails": [{ "value": "bjensen@example.com", "primary": true }]
//! });
//!
//! assert_eq!(user.get("userName").and_then(Value::as_str), Some("bjensen"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

mod macros;

mod value;
pub use value::*;

mod number;
pub use number::*;

#[cfg(feature = "serde_json")]
mod json;
