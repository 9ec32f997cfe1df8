use crate::Context;
use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::{quote, ToTokens};
use syn::{DeriveInput, GenericParam, Generics};

/// Generic parameters of the impl, i.e. declaration without defaults.
pub fn params(generics: &Generics) -> TokenStream {
    generics.params.iter().fold(quote! {}, |accum, param| {
        let param = match param {
            GenericParam::Type(type_param) => {
                let mut type_param = type_param.clone();
                type_param.eq_token = None;
                type_param.default = None;
                quote! { #type_param }
            }
            GenericParam::Lifetime(lifetime_def) => quote! { #lifetime_def },
            GenericParam::Const(const_param) => {
                let mut const_param = const_param.clone();
                const_param.eq_token = None;
                const_param.default = None;
                quote! { #const_param }
            }
        };
        quote! { #accum #param, }
    })
}

/// Generic arguments of the type, i.e. names of parameters.
pub fn args(generics: &Generics) -> TokenStream {
    generics.params.iter().fold(quote! {}, |accum, param| {
        let param = match param {
            GenericParam::Type(type_param) => {
                let param = &type_param.ident;
                quote! { #param }
            }
            GenericParam::Lifetime(lifetime_def) => {
                let param = &lifetime_def.lifetime;
                quote! { #param }
            }
            GenericParam::Const(const_param) => {
                let param = &const_param.ident;
                quote! { #param }
            }
        };
        quote! { #accum #param, }
    })
}

fn mentions(tokens: TokenStream, ident: &Ident) -> bool {
    tokens.into_iter().any(|tt| match tt {
        TokenTree::Ident(other) => other == *ident,
        TokenTree::Group(group) => mentions(group.stream(), ident),
        _ => false,
    })
}

/// Where clause that bounds each type parameter used by a readable field.
///
/// Field types themselves aren't bounded, otherwise recursive records would never resolve.
pub fn where_clause(ctx: &Context, input: &DeriveInput, bound: TokenStream) -> TokenStream {
    let existing = input.generics.where_clause.as_ref().map_or(quote! {}, |w| {
        let wp = &w.predicates;
        let comma = if wp.trailing_punct() || wp.is_empty() {
            quote! {}
        } else {
            quote! {,}
        };
        quote! { #wp #comma }
    });

    let generated = input.generics.type_params().fold(quote! {}, |accum, param| {
        let ident = &param.ident;
        let used = ctx
            .fields
            .iter()
            .filter(|field| field.readable())
            .any(|field| mentions(field.ty.to_token_stream(), ident));
        if used {
            quote! { #accum #ident: #bound, }
        } else {
            accum
        }
    });

    let self_ident = &input.ident;
    let generic_args = args(&input.generics);

    quote! {
        where
            #existing
            #self_ident<#generic_args>: ::core::fmt::Debug + 'static,
            #generated
    }
}
