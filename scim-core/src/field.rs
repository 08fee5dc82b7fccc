use crate::Shape;

crate::bitflags! {
    /// Per-field decoding flags.
    pub struct FieldFlags: u8 {
        /// Embedded record: its own fields are decoded as if they belonged to
        /// the parent, and the field itself has no key.
        const FLATTEN = 1 << 0;

        /// The decoder cannot address this field; it is never written.
        const SKIP = 1 << 1;
    }
}

/// Describes one field of a record.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// The Rust field name.
    pub name: &'static str,

    /// The declared tag name, from `#[scim(rename = "...")]` or the
    /// container's `rename_all` rule. Falls back to [`Field::name`].
    pub tag: Option<&'static str>,

    /// Shape of the field type.
    ///
    /// The indirection allows for recursive type definitions.
    pub shape: fn() -> &'static Shape,

    /// Decoding flags.
    pub flags: FieldFlags,
}

impl Field {
    /// Shape of the field type.
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }

    /// The tag if present, else the Rust name.
    pub fn declared_name(&self) -> &'static str {
        self.tag.unwrap_or(self.name)
    }

    /// The external key this field binds to in a source mapping.
    pub fn key(&self) -> String {
        lower_first(self.declared_name())
    }

    /// Whether this is an embedded record.
    pub const fn is_flattened(&self) -> bool {
        self.flags.contains(FieldFlags::FLATTEN)
    }

    /// Whether the decoder must skip this field.
    pub const fn is_skipped(&self) -> bool {
        self.flags.contains(FieldFlags::SKIP)
    }
}

/// Lower-cases the first character of `name` and keeps the rest verbatim.
///
/// `"UserName"` becomes `"userName"`, `"URL"` becomes `"uRL"`.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
