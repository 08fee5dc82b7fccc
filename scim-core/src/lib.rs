#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
//! Shapes and slots: the reflection layer under `scim-marshal`.
//!
//! Every decodable type implements [`Scim`], which hands out a static
//! [`Shape`] describing it (its [`Def`], capability flags, and for records
//! the ordered [`Field`] table), and [`Slot`], the object-safe mutable view
//! the decoder writes through. [`Slot::poke`] returns a [`Poke`], a sum type
//! over the ways a value can be written: scalar assignment, field access,
//! list/map building, optional allocation, or dynamic storage.
//!
//! Record types normally get both traits from `#[derive(Scim)]`; this crate
//! provides the implementations for primitives, `String`, `Vec`, maps with
//! string keys, `Option`, `Box`, [`Value`](scim_value::Value) and, with the
//! `uuid` feature, `uuid::Uuid`.

mod bitflags;

mod shape;
pub use shape::*;

mod field;
pub use field::*;

mod slot;
pub use slot::*;

mod hooks;
pub use hooks::*;

mod impls;

#[cfg(feature = "uuid")]
mod impls_uuid;
