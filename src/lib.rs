//! Flatten nested records into ordered keys and values.
//!
//! A record is a struct with `#[derive(Record)]`. Its `pub` fields are visited in declaration order,
//! fields holding other records are flattened recursively and their key segments are joined with a delimiter.
//!
//! # Example
//!
//! ```rust
//! use flatkeys::Record;
//!
//! #[derive(Debug, Record)]
//! struct Flat {
//!     #[flat(key = "baz")]
//!     pub baz: String,
//! }
//!
//! #[derive(Debug, Record)]
//! struct Nested {
//!     #[flat(key = "foo")]
//!     pub foo: String,
//!     pub bar: Flat,
//! }
//!
//! let sample = Nested {
//!     foo: "foo".into(),
//!     bar: Flat { baz: "baz".into() },
//! };
//!
//! assert_eq!(flatkeys::keys(&sample).unwrap(), ["foo", "barbaz"]);
//!
//! let values = flatkeys::values(&sample).unwrap();
//! assert_eq!(values[1].downcast_ref::<String>().unwrap(), "baz");
//!
//! let builder = flatkeys::Builder::new("key", ".");
//! assert_eq!(builder.keys(&sample).unwrap(), ["foo", "bar.baz"]);
//! ```
//!
//! # Fields
//!
//! + Fields that aren't `pub` or marked `#[flat(skip)]` are hidden and produce nothing.
//! + `Option<T>` holding `None` produces nothing. `Some` is transparent.
//! + `Box`, `Rc` and `Arc` are followed one level deep. A pointer to a pointer is a leaf.
//! + A nested record without visible fields produces a single key and the record itself as a value.
//! + Collections are leaves, their items aren't visited.
//!
//! # Arguments
//!
//! The top-level record must be passed by reference (`&record` or `Some(&record)`):
//!
//! + [`Error::PtrRequired`] - value passed by value.
//! + [`Error::InvalidValue`] - reference is absent.
//! + [`Error::InvalidKind`] - referenced value isn't a record.
#![no_std]

pub use flatkeys_base::{
    builder::{self, entries, keys, map, values, Builder, DEFAULT},
    error::{self, Error},
    field::{self, Field, FieldInfo, Fields},
    kind::Kind,
    traits::{self, Handle, Record, Reflect, View},
    value::Value,
    walk,
};
pub use flatkeys_macros::Record;

pub mod prelude {
    pub use flatkeys_base::prelude::*;
}
