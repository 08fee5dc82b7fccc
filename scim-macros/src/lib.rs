#![warn(missing_docs)]
//! `#[derive(Scim)]` for `scim-marshal`.
//!
//! Use it through the `scim_marshal` re-export; the generated code refers to
//! `::scim_marshal` paths.

mod emit;
mod grammar;
mod rename;

/// Derives `Scim` and `Slot` for a struct.
///
/// The type must also implement `Default`.
///
/// Container attributes:
/// - `#[scim(rename_all = "camelCase")]`: derive each field's tag from its
///   name with the given rule (`camelCase`, `PascalCase`, `snake_case`,
///   `kebab-case`, `SCREAMING_SNAKE_CASE`, `lowercase`, `UPPERCASE`)
/// - `#[scim(transparent)]`: a single-field wrapper with the shape and the
///   decode hooks of its field; scalar wrappers accept their builtin's values
/// - `#[scim(decode_self)]`: the type implements `DecodeSelf`
/// - `#[scim(identifier)]`: the type implements `DecodeIdentifier`
///
/// Field attributes:
/// - `#[scim(rename = "displayName")]`: the field's tag
/// - `#[scim(flatten)]`: embed the field's own fields into this record
/// - `#[scim(skip)]`: never decode this field (its type need not be `Scim`)
#[proc_macro_derive(Scim, attributes(scim))]
pub fn derive_scim(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = proc_macro2::TokenStream::from(input);
    match grammar::parse_struct(input) {
        Ok(parsed) => emit::emit(&parsed).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
