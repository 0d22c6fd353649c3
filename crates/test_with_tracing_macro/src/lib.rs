// Copyright (C) Microsoft Corporation. All rights reserved.

//! Proc macro for the `#[test_with_tracing::test]` attribute.
//!
//! The attribute expands to a regular `#[test]` function whose body first
//! calls `test_with_tracing::init()`, so `tracing` output emitted by the code
//! under test is captured by the test harness.
//!
//! ```ignore
//! use test_with_tracing::test;
//!
//! #[test]
//! fn test_sha256_empty() {
//!     tracing::info!("runs with a subscriber installed");
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;
use syn::spanned::Spanned;
use syn::ItemFn;

/// Attribute macro that marks a test and installs the tracing subscriber.
///
/// Takes no arguments. Other attributes on the function (`#[should_panic]`,
/// `#[ignore]`, `#[cfg(..)]`) are preserved.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr: proc_macro2::TokenStream = attr.into();
    let item = parse_macro_input!(item as ItemFn);

    expand_test(attr, item)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand_test(
    attr: proc_macro2::TokenStream,
    item: ItemFn,
) -> syn::Result<proc_macro2::TokenStream> {
    if !attr.is_empty() {
        return Err(syn::Error::new(
            attr.span(),
            "#[test_with_tracing::test] does not take arguments",
        ));
    }

    if item.sig.asyncness.is_some() {
        return Err(syn::Error::new(
            item.sig.fn_token.span(),
            "#[test_with_tracing::test] does not support async functions",
        ));
    }

    if !item.sig.inputs.is_empty() {
        return Err(syn::Error::new(
            item.sig.inputs.span(),
            "test functions cannot take arguments",
        ));
    }

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = item;

    Ok(quote! {
        #[::core::prelude::v1::test]
        #(#attrs)*
        #vis #sig {
            ::test_with_tracing::init();
            #block
        }
    })
}
