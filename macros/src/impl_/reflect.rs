use crate::{utils::generic, Context};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub fn impl_(ctx: &Context, input: &DeriveInput) -> TokenStream {
    let self_ident = &input.ident;

    let generic_params = generic::params(&input.generics);
    let generic_args = generic::args(&input.generics);
    let where_clause = generic::where_clause(ctx, input, quote! { ::flatkeys::Reflect });

    quote! {
        impl<#generic_params> ::flatkeys::Reflect for #self_ident<#generic_args>
        #where_clause
        {
            fn kind(&self) -> ::flatkeys::Kind {
                ::flatkeys::Kind::Struct
            }
            fn view(&self) -> ::flatkeys::View<'_> {
                ::flatkeys::View::Record(self)
            }
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    }
}
