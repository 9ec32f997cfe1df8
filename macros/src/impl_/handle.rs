use crate::{utils::generic, Context};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Records passed by value are rejected.
pub fn impl_(ctx: &Context, input: &DeriveInput) -> TokenStream {
    let self_ident = &input.ident;

    let generic_params = generic::params(&input.generics);
    let generic_args = generic::args(&input.generics);
    let where_clause = generic::where_clause(ctx, input, quote! { ::flatkeys::Reflect });

    quote! {
        impl<'__flatkeys, #generic_params> ::flatkeys::Handle<'__flatkeys> for #self_ident<#generic_args>
        #where_clause
        {
            fn follow(self) -> ::core::result::Result<&'__flatkeys dyn ::flatkeys::Reflect, ::flatkeys::Error> {
                ::core::result::Result::Err(::flatkeys::Error::ptr_required(&self))
            }
        }
    }
}
