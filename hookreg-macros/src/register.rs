//! Registration attributes.
//!
//! This module contains:
//! - `#[hook_handler]` - registers a function in a handler unit
//! - `#[on_load]` - registers a unit's load-time initialiser

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Ident, ItemFn, LitStr, ReturnType, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments shared by both attributes.
pub(crate) struct UnitArgs {
    /// The unit location the item belongs to.
    pub location: LitStr,
    /// Function name bindings refer to; defaults to the Rust name.
    pub name: Option<LitStr>,
}

impl Parse for UnitArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut location = None;
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "location" => location = Some(input.parse::<LitStr>()?),
                "name" => name = Some(input.parse::<LitStr>()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let location = location.ok_or_else(|| {
            syn::Error::new(
                input.span(),
                "missing `location = \"...\"`: the handler unit this belongs to",
            )
        })?;

        Ok(UnitArgs { location, name })
    }
}

/// Implementation of `#[hook_handler]`.
pub fn hook_handler_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as UnitArgs);
    let input = parse_macro_input!(item as ItemFn);

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "hook handlers run synchronously and cannot be async")
            .to_compile_error()
            .into();
    }

    if input.sig.inputs.len() != 1 {
        return syn::Error::new_spanned(
            &input.sig.inputs,
            "hook handler must take exactly one argument: `args: &HookArgs`",
        )
        .to_compile_error()
        .into();
    }

    let fn_name = &input.sig.ident;
    let location = &args.location;
    let function = args
        .name
        .clone()
        .unwrap_or_else(|| LitStr::new(&fn_name.to_string(), fn_name.span()));

    // Functions without a return type are wrapped so they report success.
    let (wrapper, handler) = match &input.sig.output {
        ReturnType::Default => {
            let wrapper_name = format_ident!("__HookHandler_{}", fn_name);
            let wrapper = quote! {
                #[allow(non_camel_case_types)]
                #[doc(hidden)]
                struct #wrapper_name;

                impl ::hookreg::Handler for #wrapper_name {
                    fn call(
                        &self,
                        args: &::hookreg::HookArgs,
                    ) -> ::core::result::Result<(), ::hookreg::BoxError> {
                        #fn_name(args);
                        ::core::result::Result::Ok(())
                    }
                }
            };
            (wrapper, quote! { &#wrapper_name })
        }
        ReturnType::Type(..) => (quote! {}, quote! { &#fn_name }),
    };

    let expanded: proc_macro2::TokenStream = quote! {
        #input

        #wrapper

        ::hookreg::inventory::submit! {
            ::hookreg::loader::HandlerRegistration {
                location: #location,
                function: #function,
                handler: #handler,
            }
        }
    };

    TokenStream::from(expanded)
}

/// Implementation of `#[on_load]`.
pub fn on_load_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as UnitArgs);
    let input = parse_macro_input!(item as ItemFn);

    if let Some(name) = &args.name {
        return syn::Error::new_spanned(name, "`name` does not apply to load-time initialisers")
            .to_compile_error()
            .into();
    }

    if input.sig.asyncness.is_some() || !input.sig.inputs.is_empty() {
        return syn::Error::new_spanned(
            &input.sig,
            "load-time initialiser must be a plain `fn()` with no arguments",
        )
        .to_compile_error()
        .into();
    }

    let fn_name = &input.sig.ident;
    let location = &args.location;

    let expanded: proc_macro2::TokenStream = quote! {
        #input

        ::hookreg::inventory::submit! {
            ::hookreg::loader::UnitInitializer {
                location: #location,
                on_load: #fn_name,
            }
        }
    };

    TokenStream::from(expanded)
}
