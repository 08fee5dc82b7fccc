use scim_value::Value;

use crate::{DecodeIdentifier, DecodeSelf, Shape};

/// A type the decoder can write into.
///
/// Implemented by `#[derive(Scim)]` for records and by this crate for the
/// builtin scalar and container types.
pub trait Scim: Slot + Default + 'static {
    /// The static description of this type.
    const SHAPE: &'static Shape;
}

/// Object-safe mutable view of a decodable value.
pub trait Slot {
    /// The shape of the value behind this slot.
    fn shape(&self) -> &'static Shape;

    /// How this value is written.
    fn poke(&mut self) -> Poke<'_>;

    /// Resets the value to its type's default.
    fn reset(&mut self);

    /// The self-decode capability, for shapes flagged
    /// [`DECODE_SELF`](crate::ShapeFlags::DECODE_SELF).
    fn as_decode_self(&mut self) -> Option<&mut dyn DecodeSelf> {
        None
    }

    /// The identifier-decode capability, for shapes flagged
    /// [`DECODE_IDENTIFIER`](crate::ShapeFlags::DECODE_IDENTIFIER).
    fn as_decode_identifier(&mut self) -> Option<&mut dyn DecodeIdentifier> {
        None
    }
}

/// The ways a value can be written, one variant per [`Def`](crate::Def).
pub enum Poke<'a> {
    /// Assign a bool, string or number.
    Scalar(&'a mut dyn PokeScalar),
    /// Reach into a record's fields.
    Struct(&'a mut dyn PokeStruct),
    /// Rebuild a list.
    List(&'a mut dyn PokeList),
    /// Rebuild a string-keyed map.
    Map(&'a mut dyn PokeMap),
    /// Allocate or clear an optional value.
    Option(&'a mut dyn PokeOption),
    /// Store the source value verbatim.
    Dynamic(&'a mut Value),
    /// No generic write access.
    Opaque,
}

/// Write access to a scalar.
pub trait PokeScalar {
    /// Assigns `value`, converting between numeric widths and from a builtin
    /// scalar into a nominal one as needed.
    ///
    /// Numeric conversions follow Rust `as` casts: integers wrap, floats
    /// saturate and NaN becomes zero. Returns `false` if the value is of a
    /// kind this scalar cannot hold; the scalar is unchanged in that case.
    fn set(&mut self, value: &Value) -> bool;
}

/// Write access to a record's fields.
pub trait PokeStruct {
    /// The field at `index` in the record's field table, or `None` for
    /// skipped fields and out-of-range indices.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Slot>;
}

/// Write access to a list.
pub trait PokeList {
    /// Removes every element.
    fn clear(&mut self);

    /// Reserves room for exactly `additional` more elements.
    fn reserve_exact(&mut self, additional: usize);

    /// Appends a default element and returns it.
    fn push_default(&mut self) -> &mut dyn Slot;
}

/// Write access to a string-keyed map.
pub trait PokeMap {
    /// Removes every entry.
    fn clear(&mut self);

    /// Stores a default value under `key`, replacing any previous one, and
    /// returns it.
    fn insert_default(&mut self, key: &str) -> &mut dyn Slot;
}

/// Write access to an optional value.
pub trait PokeOption {
    /// Whether a value is present.
    fn is_some(&self) -> bool;

    /// Clears the value.
    fn set_none(&mut self);

    /// Returns the present value, allocating a default one first if needed.
    fn get_or_insert_default(&mut self) -> &mut dyn Slot;
}
