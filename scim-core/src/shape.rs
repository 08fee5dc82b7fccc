use core::any::TypeId;
use core::fmt;

use scim_value::ValueKind;

use crate::Field;

crate::bitflags! {
    /// Capabilities a type declares about its own decoding.
    pub struct ShapeFlags: u8 {
        /// The type decodes itself from a raw mapping through
        /// [`DecodeSelf`](crate::DecodeSelf); generic field walking never runs for it.
        const DECODE_SELF = 1 << 0;

        /// The type converts scalar sources that do not match its concrete type
        /// through [`DecodeIdentifier`](crate::DecodeIdentifier).
        const DECODE_IDENTIFIER = 1 << 1;
    }
}

/// Identity of the Rust type a shape describes.
///
/// Shapes live in constants, so their addresses are not unique; compare ids
/// instead.
#[derive(Clone, Copy)]
pub struct ShapeId(fn() -> TypeId);

impl ShapeId {
    /// The id of `T`.
    pub const fn of<T: ?Sized + 'static>() -> Self {
        Self(TypeId::of::<T>)
    }

    /// The underlying [`TypeId`].
    pub fn get(self) -> TypeId {
        (self.0)()
    }
}

impl PartialEq for ShapeId {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for ShapeId {}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

/// Static description of a decodable type.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    /// The Rust type this shape describes.
    pub id: ShapeId,

    /// Name of the type as written in source, e.g. `String`, `User`, `Vec`.
    ///
    /// Two shapes with the same identifier are the same concrete type as far
    /// as scalar assignment is concerned.
    pub type_identifier: &'static str,

    /// How values of this type are built.
    pub def: Def,

    /// Declared decode capabilities.
    pub flags: ShapeFlags,
}

impl Shape {
    /// The shape of `T`, with no flags.
    pub const fn new<T: ?Sized + 'static>(type_identifier: &'static str, def: Def) -> Self {
        Self {
            id: ShapeId::of::<T>(),
            type_identifier,
            def,
            flags: ShapeFlags::empty(),
        }
    }

    /// Adds capability flags.
    pub const fn with_flags(mut self, flags: ShapeFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    /// Whether both shapes describe the same Rust type.
    pub fn is(&self, other: &Shape) -> bool {
        self.id == other.id
    }

    /// Whether the type owns its decoding from a mapping.
    pub const fn decodes_self(&self) -> bool {
        self.flags.contains(ShapeFlags::DECODE_SELF)
    }

    /// Whether the type owns conversion of mismatched scalar sources.
    pub const fn decodes_identifier(&self) -> bool {
        self.flags.contains(ShapeFlags::DECODE_IDENTIFIER)
    }

    /// Whether a mapping can be decoded into a value of this shape.
    pub fn accepts_object(&self) -> bool {
        if self.decodes_self() {
            return true;
        }
        match self.def {
            Def::Struct(_) | Def::Map(_) | Def::Dynamic => true,
            Def::Option(opt) => opt.inner().accepts_object(),
            Def::Scalar(_) | Def::List(_) | Def::Opaque => false,
        }
    }

    /// The record definition, if this is a record.
    pub const fn as_struct(&self) -> Option<&StructDef> {
        match &self.def {
            Def::Struct(def) => Some(def),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.def {
            Def::List(list) => write!(f, "{}<{}>", self.type_identifier, list.item()),
            Def::Map(map) => write!(f, "{}<String, {}>", self.type_identifier, map.value()),
            Def::Option(opt) => write!(f, "{}<{}>", self.type_identifier, opt.inner()),
            _ => f.write_str(self.type_identifier),
        }
    }
}

/// The structural category of a type.
#[derive(Clone, Copy, Debug)]
pub enum Def {
    /// A single value: bool, string or number.
    Scalar(ScalarDef),
    /// A record with named fields.
    Struct(StructDef),
    /// An ordered, growable sequence.
    List(ListDef),
    /// A mapping from string keys to values.
    Map(MapDef),
    /// An optional value, allocated on demand.
    Option(OptionDef),
    /// A loosely-typed [`Value`](scim_value::Value) that stores its source verbatim.
    Dynamic,
    /// A type with no generic decoding; only reachable through hooks.
    Opaque,
}

/// Definition of a scalar type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarDef {
    /// The kind of source value this scalar is written from.
    pub kind: ScalarKind,
}

impl ScalarDef {
    /// A builtin scalar of the given kind.
    pub const fn new(kind: ScalarKind) -> Self {
        Self { kind }
    }
}

/// Kinds of scalar targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `bool`
    Bool,
    /// `String`
    String,
    /// Signed integers
    Integer,
    /// Unsigned integers
    Unsigned,
    /// `f32` / `f64`
    Float,
}

impl ScalarKind {
    /// Whether a source value of `kind` belongs to the same family as this
    /// target kind. All numeric targets accept every number.
    pub const fn accepts(self, kind: ValueKind) -> bool {
        matches!(
            (self, kind),
            (ScalarKind::Bool, ValueKind::Bool)
                | (ScalarKind::String, ValueKind::String)
                | (
                    ScalarKind::Integer | ScalarKind::Unsigned | ScalarKind::Float,
                    ValueKind::Number
                )
        )
    }
}

/// Definition of a record.
#[derive(Clone, Copy, Debug)]
pub struct StructDef {
    /// All fields, in declaration order.
    pub fields: &'static [Field],
}

/// Definition of a list.
#[derive(Clone, Copy, Debug)]
pub struct ListDef {
    /// Shape of the elements.
    pub item: fn() -> &'static Shape,
}

impl ListDef {
    /// Shape of the elements.
    pub fn item(&self) -> &'static Shape {
        (self.item)()
    }
}

/// Definition of a string-keyed map.
#[derive(Clone, Copy, Debug)]
pub struct MapDef {
    /// Shape of the values.
    pub value: fn() -> &'static Shape,
}

impl MapDef {
    /// Shape of the values.
    pub fn value(&self) -> &'static Shape {
        (self.value)()
    }
}

/// Definition of an optional value.
#[derive(Clone, Copy, Debug)]
pub struct OptionDef {
    /// Shape of the wrapped value.
    pub inner: fn() -> &'static Shape,
}

impl OptionDef {
    /// Shape of the wrapped value.
    pub fn inner(&self) -> &'static Shape {
        (self.inner)()
    }
}

enum Unaddressable {}

/// Shape of fields the decoder must never touch (`#[scim(skip)]`).
pub const UNADDRESSABLE: Shape = Shape::new::<Unaddressable>("_", Def::Opaque);

/// Returns [`UNADDRESSABLE`]; used in field tables for skipped fields.
pub fn unaddressable() -> &'static Shape {
    &UNADDRESSABLE
}

/// Returns `T::SHAPE`; used in field and container tables so shapes are
/// resolved lazily and recursive types stay expressible.
pub fn shape_of<T: crate::Scim>() -> &'static Shape {
    T::SHAPE
}
