//! `#[scim_testhelpers::test]`

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    struct UntilFn {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    struct UntilBody {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        until_fn: UntilFn,
        _fn: KFn,
        name: Ident,
        until_body: UntilBody,
        body: BraceGroup,
    }
}

/// Marks a test and installs the shared test logging before its body runs.
///
/// ```ignore
/// #[scim_testhelpers::test]
/// fn decodes_user() {
///     // SCIM_LOG=scim_marshal=trace shows every field decision
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut iter = item.to_token_iter();
    let decl = match iter.parse::<TestFn>() {
        Ok(decl) => decl,
        Err(_) => {
            return quote::quote! {
                ::core::compile_error!("#[scim_testhelpers::test] expects a function");
            }
            .into();
        }
    };

    let mut head = TokenStream::new();
    decl.until_fn.items.to_tokens(&mut head);
    let mut signature = TokenStream::new();
    decl.until_body.items.to_tokens(&mut signature);
    let name = decl.name;
    let body = decl.body.0.stream();

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #head fn #name #signature {
            ::scim_testhelpers::setup();

            #body
        }
    }
    .into()
}
