//! Parses a `#[derive(Scim)]` input into a [`PStruct`].

use proc_macro2::{Ident, Literal, Span, TokenStream, TokenTree};
use quote::quote_spanned;
use unsynn::{
    Any, BraceGroupContaining, BracketGroup, Colon, Comma, CommaDelimitedVec, Cons, Either,
    Except, IParse, ParenthesisGroup, ParenthesisGroupContaining, Pound, Semicolon, ToTokenIter,
    ToTokens, keyword, operator, unsynn,
};

use crate::rename::RenameRule;

keyword! {
    KStruct = "struct";
    KPub = "pub";
    KScim = "scim";
}

operator! {
    LAngle = "<";
    RAngle = ">";
    Arrow = "->";
    Equals = "=";
}

unsynn! {
    /// `pub`, `pub(crate)`, `pub(in path)`
    enum Vis {
        PubIn(Cons<KPub, ParenthesisGroup>),
        Pub(KPub),
    }

    /// `#[...]`
    struct Attribute {
        _pound: Pound,
        content: BracketGroup,
    }

    struct StructDecl {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _kw: KStruct,
        name: Ident,
        body: StructBody,
    }

    enum StructBody {
        Named(BraceGroupContaining<CommaDelimitedVec<NamedField>>),
        Tuple(Cons<ParenthesisGroupContaining<CommaDelimitedVec<TupleField>>, Semicolon>),
        Unit(Semicolon),
    }

    struct NamedField {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        name: Ident,
        _colon: Colon,
        ty: FieldType,
    }

    struct TupleField {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        ty: FieldType,
    }

    /// A type, up to the next comma outside of `<...>`.
    struct FieldType {
        tokens: Any<Cons<Except<Comma>, AngleTokenTree>>,
    }

    /// A token tree where `<...>` counts as one tree, so the commas of
    /// generic arguments stay inside the type. `->` is a single tree so its
    /// `>` never closes a bracket.
    struct AngleTokenTree(
        Either<
            Cons<LAngle, Cons<Vec<Cons<Except<RAngle>, AngleTokenTree>>, RAngle>>,
            Either<Arrow, TokenTree>,
        >,
    );

    /// The arguments of `#[scim(...)]`.
    struct ScimArgs {
        _scim: KScim,
        args: ParenthesisGroupContaining<CommaDelimitedVec<ScimArg>>,
    }

    /// `name` or `name = "value"`
    struct ScimArg {
        name: Ident,
        value: Option<Cons<Equals, Literal>>,
    }
}

/// An error reported at a span through `compile_error!`.
pub struct CompileError {
    span: Span,
    message: String,
}

impl CompileError {
    fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    pub fn into_compile_error(self) -> TokenStream {
        let message = self.message;
        quote_spanned! { self.span => ::core::compile_error!(#message); }
    }
}

/// A parsed struct.
pub struct PStruct {
    pub name: Ident,
    pub attrs: PAttrs,
    pub body: PBody,
}

pub enum PBody {
    Named(Vec<PField>),
    Tuple(Vec<PField>),
    Unit,
}

impl PBody {
    pub fn fields(&self) -> &[PField] {
        match self {
            PBody::Named(fields) | PBody::Tuple(fields) => fields,
            PBody::Unit => &[],
        }
    }
}

/// How a field is reached from `self`: `self.name` or `self.0`.
pub enum Member {
    Named(Ident),
    Index(usize),
}

pub struct PField {
    pub member: Member,
    /// The Rust name without any `r#` prefix; the index for tuple fields.
    pub name: String,
    pub ty: TokenStream,
    pub attrs: PAttrs,
}

/// `#[scim(...)]` attributes of a container or a field.
#[derive(Default)]
pub struct PAttrs {
    pub rename: Option<String>,
    pub rename_all: Option<RenameRule>,
    pub flatten: bool,
    pub skip: bool,
    pub transparent: bool,
    pub decode_self: bool,
    pub identifier: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AttrSite {
    Container,
    Field,
}

pub fn parse_struct(input: TokenStream) -> Result<PStruct, CompileError> {
    let mut iter = input.to_token_iter();
    let decl = iter.parse::<StructDecl>().map_err(|_| {
        CompileError::new(
            Span::call_site(),
            "#[derive(Scim)] supports non-generic structs only",
        )
    })?;

    let attrs = parse_attrs(&decl.attrs, AttrSite::Container)?;
    let body = match decl.body {
        StructBody::Named(group) => {
            let mut fields = Vec::new();
            for field in group.content.iter().map(|d| &d.value) {
                let name = field.name.to_string();
                let name = name.strip_prefix("r#").unwrap_or(&name).to_owned();
                fields.push(PField {
                    member: Member::Named(field.name.clone()),
                    name,
                    ty: field_type(&field.ty, field.name.span())?,
                    attrs: parse_attrs(&field.attrs, AttrSite::Field)?,
                });
            }
            PBody::Named(fields)
        }
        StructBody::Tuple(tuple) => {
            let mut fields = Vec::new();
            for (index, field) in tuple.first.content.iter().map(|d| &d.value).enumerate() {
                fields.push(PField {
                    member: Member::Index(index),
                    name: index.to_string(),
                    ty: field_type(&field.ty, decl.name.span())?,
                    attrs: parse_attrs(&field.attrs, AttrSite::Field)?,
                });
            }
            PBody::Tuple(fields)
        }
        StructBody::Unit(_) => PBody::Unit,
    };

    Ok(PStruct {
        name: decl.name,
        attrs,
        body,
    })
}

fn field_type(ty: &FieldType, span: Span) -> Result<TokenStream, CompileError> {
    let mut tokens = TokenStream::new();
    ty.to_tokens(&mut tokens);
    if tokens.is_empty() {
        return Err(CompileError::new(span, "expected a field type"));
    }
    Ok(tokens)
}

fn parse_attrs(attrs: &[Attribute], site: AttrSite) -> Result<PAttrs, CompileError> {
    let mut parsed = PAttrs::default();
    for attr in attrs {
        let group = &attr.content.0;
        let is_scim = matches!(
            group.stream().into_iter().next(),
            Some(TokenTree::Ident(ident)) if ident == "scim"
        );
        if !is_scim {
            continue;
        }

        let mut tokens = group.stream().to_token_iter();
        let args = match tokens.parse::<ScimArgs>() {
            Ok(args) if tokens.next().is_none() => args,
            _ => {
                return Err(CompileError::new(
                    group.span(),
                    "expected `scim(name, name = \"value\", ...)`",
                ));
            }
        };
        for arg in args.args.content.iter().map(|d| &d.value) {
            apply_scim_attr(arg, site, &mut parsed)?;
        }
    }
    Ok(parsed)
}

fn apply_scim_attr(arg: &ScimArg, site: AttrSite, attrs: &mut PAttrs) -> Result<(), CompileError> {
    let key = &arg.name;
    let value = match &arg.value {
        Some(value) => Some(string_literal(&value.second)?),
        None => None,
    };

    let name = key.to_string();
    match (site, name.as_str(), value) {
        (AttrSite::Field, "rename", Some(v)) => attrs.rename = Some(v),
        (AttrSite::Field, "flatten", None) => attrs.flatten = true,
        (AttrSite::Field, "skip", None) => attrs.skip = true,
        (AttrSite::Container, "rename_all", Some(v)) => match RenameRule::parse(&v) {
            Some(rule) => attrs.rename_all = Some(rule),
            None => {
                return Err(CompileError::new(
                    key.span(),
                    format!("unknown rename rule `{v}`"),
                ));
            }
        },
        (AttrSite::Container, "transparent", None) => attrs.transparent = true,
        (AttrSite::Container, "decode_self", None) => attrs.decode_self = true,
        (AttrSite::Container, "identifier", None) => attrs.identifier = true,
        (site, name, _) => {
            let place = match site {
                AttrSite::Container => "container",
                AttrSite::Field => "field",
            };
            return Err(CompileError::new(
                key.span(),
                format!("unknown or malformed {place} attribute `scim({name})`"),
            ));
        }
    }
    Ok(())
}

fn string_literal(lit: &Literal) -> Result<String, CompileError> {
    let repr = lit.to_string();
    match repr.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) if !inner.contains('\\') => Ok(inner.to_owned()),
        _ => Err(CompileError::new(
            lit.span(),
            "expected a plain string literal",
        )),
    }
}
