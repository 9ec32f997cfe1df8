use crate::{utils::generic, Context};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

fn field_infos(ctx: &Context) -> TokenStream {
    let infos = ctx.fields.iter().fold(quote! {}, |accum, field| {
        let name = &field.name;
        let exported = field.exported;
        let tags = field.tags.iter().fold(quote! {}, |accum, (key, value)| {
            quote! { #accum (#key, #value), }
        });
        quote! {
            #accum
            ::flatkeys::FieldInfo::new(#name, &[#tags], #exported),
        }
    });
    quote! {
        fn field_infos(&self) -> &'static [::flatkeys::FieldInfo] {
            const FIELDS: &[::flatkeys::FieldInfo] = &[#infos];
            FIELDS
        }
    }
}

fn field_value(ctx: &Context) -> TokenStream {
    let arms = ctx
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.readable())
        .fold(quote! {}, |accum, (index, field)| {
            let member = &field.member;
            quote! {
                #accum
                #index => ::core::option::Option::Some(&self.#member as &dyn ::flatkeys::Reflect),
            }
        });
    quote! {
        fn field_value(&self, index: usize) -> ::core::option::Option<&dyn ::flatkeys::Reflect> {
            match index {
                #arms
                _ => ::core::option::Option::None,
            }
        }
    }
}

pub fn impl_(ctx: &Context, input: &DeriveInput) -> TokenStream {
    let self_ident = &input.ident;

    let generic_params = generic::params(&input.generics);
    let generic_args = generic::args(&input.generics);
    let where_clause = generic::where_clause(ctx, input, quote! { ::flatkeys::Reflect });

    let field_infos = field_infos(ctx);
    let field_value = field_value(ctx);

    quote! {
        impl<#generic_params> ::flatkeys::Record for #self_ident<#generic_args>
        #where_clause
        {
            #field_infos
            #field_value
            fn as_reflect(&self) -> &dyn ::flatkeys::Reflect {
                self
            }
        }
    }
}
