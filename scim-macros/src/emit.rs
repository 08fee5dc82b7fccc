use proc_macro2::{Literal, TokenStream};
use quote::{quote, quote_spanned};

use crate::grammar::{Member, PBody, PField, PStruct};

pub fn emit(parsed: &PStruct) -> TokenStream {
    let name = &parsed.name;
    let attrs = &parsed.attrs;
    let fields = parsed.body.fields();

    if attrs.transparent && fields.len() != 1 {
        return error(name, "#[scim(transparent)] needs exactly one field");
    }
    let opaque = !attrs.transparent && (attrs.decode_self || attrs.identifier);
    if matches!(parsed.body, PBody::Tuple(_)) && !attrs.transparent && !opaque {
        return error(
            name,
            "tuple structs must be #[scim(transparent)], #[scim(identifier)] or #[scim(decode_self)]",
        );
    }

    let type_identifier = name.to_string();

    let mut flags = quote! { ::scim_marshal::ShapeFlags::empty() };
    let mut hooks = TokenStream::new();
    if attrs.decode_self {
        flags = quote! { #flags.union(::scim_marshal::ShapeFlags::DECODE_SELF) };
        hooks.extend(quote! {
            fn as_decode_self(&mut self) -> ::core::option::Option<&mut dyn ::scim_marshal::DecodeSelf> {
                ::core::option::Option::Some(self)
            }
        });
    }
    if attrs.identifier {
        flags = quote! { #flags.union(::scim_marshal::ShapeFlags::DECODE_IDENTIFIER) };
        hooks.extend(quote! {
            fn as_decode_identifier(&mut self) -> ::core::option::Option<&mut dyn ::scim_marshal::DecodeIdentifier> {
                ::core::option::Option::Some(self)
            }
        });
    }

    let mut extra = TokenStream::new();
    let (def, poke) = if attrs.transparent {
        let inner = &fields[0];
        let ty = &inner.ty;
        let member = member_tokens(&inner.member);
        // Hooks the wrapper does not declare itself come from its field.
        flags = quote! { #flags.union(<#ty as ::scim_marshal::Scim>::SHAPE.flags) };
        if !attrs.decode_self {
            hooks.extend(quote! {
                fn as_decode_self(&mut self) -> ::core::option::Option<&mut dyn ::scim_marshal::DecodeSelf> {
                    ::scim_marshal::Slot::as_decode_self(&mut self.#member)
                }
            });
        }
        if !attrs.identifier {
            hooks.extend(quote! {
                fn as_decode_identifier(&mut self) -> ::core::option::Option<&mut dyn ::scim_marshal::DecodeIdentifier> {
                    ::scim_marshal::Slot::as_decode_identifier(&mut self.#member)
                }
            });
        }
        (
            quote! { <#ty as ::scim_marshal::Scim>::SHAPE.def },
            quote! { ::scim_marshal::Slot::poke(&mut self.#member) },
        )
    } else if opaque {
        (
            quote! { ::scim_marshal::Def::Opaque },
            quote! { ::scim_marshal::Poke::Opaque },
        )
    } else {
        let table = fields.iter().map(|f| field_entry(f, attrs.rename_all));
        let arms = fields.iter().enumerate().filter(|(_, f)| !f.attrs.skip).map(|(i, f)| {
            let member = member_tokens(&f.member);
            quote! {
                #i => ::core::option::Option::Some(&mut self.#member as &mut dyn ::scim_marshal::Slot),
            }
        });
        extra.extend(quote! {
            #[automatically_derived]
            impl ::scim_marshal::PokeStruct for #name {
                fn field_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn ::scim_marshal::Slot> {
                    match index {
                        #(#arms)*
                        _ => ::core::option::Option::None,
                    }
                }
            }
        });
        (
            quote! {
                ::scim_marshal::Def::Struct(::scim_marshal::StructDef {
                    fields: &const {[#(#table),*]},
                })
            },
            quote! { ::scim_marshal::Poke::Struct(self) },
        )
    };

    quote! {
        #[automatically_derived]
        impl ::scim_marshal::Scim for #name {
            const SHAPE: &'static ::scim_marshal::Shape = &const {
                ::scim_marshal::Shape::new::<Self>(#type_identifier, #def)
                    .with_flags(#flags)
            };
        }

        #[automatically_derived]
        impl ::scim_marshal::Slot for #name {
            fn shape(&self) -> &'static ::scim_marshal::Shape {
                <Self as ::scim_marshal::Scim>::SHAPE
            }

            fn poke(&mut self) -> ::scim_marshal::Poke<'_> {
                #poke
            }

            fn reset(&mut self) {
                *self = <Self as ::core::default::Default>::default();
            }

            #hooks
        }

        #extra
    }
}

fn field_entry(field: &PField, rename_all: Option<crate::rename::RenameRule>) -> TokenStream {
    let name = &field.name;
    let tag = field
        .attrs
        .rename
        .clone()
        .or_else(|| rename_all.map(|rule| rule.apply(&field.name)));
    let tag = match tag {
        Some(tag) => quote! { ::core::option::Option::Some(#tag) },
        None => quote! { ::core::option::Option::None },
    };

    let ty = &field.ty;
    let shape = if field.attrs.skip {
        quote! { ::scim_marshal::unaddressable }
    } else {
        quote! { ::scim_marshal::shape_of::<#ty> }
    };

    let mut flags = quote! { ::scim_marshal::FieldFlags::empty() };
    if field.attrs.flatten {
        flags = quote! { #flags.union(::scim_marshal::FieldFlags::FLATTEN) };
    }
    if field.attrs.skip {
        flags = quote! { #flags.union(::scim_marshal::FieldFlags::SKIP) };
    }
    quote! {
        ::scim_marshal::Field {
            name: #name,
            tag: #tag,
            shape: #shape,
            flags: #flags,
        }
    }
}

fn member_tokens(member: &Member) -> TokenStream {
    match member {
        Member::Named(ident) => quote! { #ident },
        Member::Index(i) => {
            let lit = Literal::usize_unsuffixed(*i);
            quote! { #lit }
        }
    }
}

fn error(name: &proc_macro2::Ident, message: &str) -> TokenStream {
    quote_spanned! { name.span() => ::core::compile_error!(#message); }
}
