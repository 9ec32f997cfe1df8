mod context;
mod impl_;
mod info;
mod utils;

use context::Context;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derive macro that makes a struct flattenable.
///
/// Implements `Reflect`, `Record` and `Handle`. The struct must also implement `Debug`.
///
/// # Usage example
///
/// ```rust,ignore
/// #[derive(Debug, flatkeys::Record)]
/// struct Nested {
///     #[flat(key = "foo")]
///     pub foo: String,
///     pub bar: Flat,
/// }
/// ```
///
/// # Field visibility
///
/// Only `pub` fields are visited, other fields are hidden and contribute nothing.
///
/// # Field attributes
///
/// + `name = "value"` - annotation that overrides the field name. The builder picks the annotation by its name,
///   the default builder uses `key`. Any number of annotations with different names is allowed.
/// + `skip` - hide the `pub` field.
/// + `opaque` - keep the key of the field but don't read its value. The field type doesn't need to implement `Reflect`.
#[proc_macro_derive(Record, attributes(flat))]
pub fn derive_record(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);
    let ctx = match Context::new(&input) {
        Ok(ctx) => ctx,
        Err(err) => return TokenStream::from(err.to_compile_error()),
    };

    let reflect_impl = impl_::reflect(&ctx, &input);
    let record_impl = impl_::record(&ctx, &input);
    let handle_impl = impl_::handle(&ctx, &input);

    TokenStream::from(quote! {
        #reflect_impl
        #record_impl
        #handle_impl
    })
}
