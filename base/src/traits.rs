use crate::{error::Error, field::FieldInfo, kind::Kind};
use alloc::format;
use core::{
    any::{type_name, Any},
    fmt::Debug,
};

/// How a value looks to the walker.
#[derive(Clone, Copy, Debug)]
pub enum View<'a> {
    /// Value is a record whose fields could be flattened.
    Record(&'a dyn Record),
    /// Value is a single level of indirection. `None` means that the reference is absent.
    Ref(Option<&'a dyn Reflect>),
    /// Value is opaque to the walker.
    Leaf(&'a dyn Reflect),
}

/// Value that could be inspected by the walker.
///
/// Implemented for primitives, strings, collections and smart pointers.
/// Records get it from `#[derive(Record)]`.
pub trait Reflect: Any + Debug {
    /// Shape of the value, for diagnostics.
    fn kind(&self) -> Kind;

    fn view(&self) -> View<'_>;

    fn as_any(&self) -> &dyn Any;
}

/// Record with an ordered set of named fields.
pub trait Record: Reflect {
    /// Descriptors of all fields including hidden ones, in declaration order.
    fn field_infos(&self) -> &'static [FieldInfo];

    /// Value of the field with given index.
    ///
    /// Returns `None` if the value cannot be read (field is hidden, opaque or `index` is out of bounds).
    fn field_value(&self, index: usize) -> Option<&dyn Reflect>;

    /// The record itself as a reflected value.
    fn as_reflect(&self) -> &dyn Reflect;
}

/// Argument of flattening operations.
///
/// Top-level record must be passed by reference: `&record` or `Some(&record)`.
/// Passing a record (or any other value) by value fails with [`Error::PtrRequired`].
pub trait Handle<'a> {
    /// Follow the reference and return referenced value.
    fn follow(self) -> Result<&'a dyn Reflect, Error>;
}

impl<'a, T: Reflect> Handle<'a> for &'a T {
    fn follow(self) -> Result<&'a dyn Reflect, Error> {
        Ok(self)
    }
}

impl<'a, T: Reflect> Handle<'a> for Option<&'a T> {
    fn follow(self) -> Result<&'a dyn Reflect, Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::InvalidValue(format!("None::<&{}>", type_name::<T>()))),
        }
    }
}
