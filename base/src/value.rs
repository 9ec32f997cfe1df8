use crate::{kind::Kind, traits::Reflect};
use core::{
    any::Any,
    fmt::{self, Debug},
    ptr,
};

/// Opaque leaf value borrowed from the flattened record.
///
/// May also be a placeholder for a field whose value cannot be read.
#[derive(Clone, Copy)]
pub struct Value<'a> {
    inner: Option<&'a dyn Reflect>,
}

impl<'a> Value<'a> {
    /// Placeholder for an unreadable value.
    pub const NONE: Self = Self { inner: None };

    pub fn new(value: &'a dyn Reflect) -> Self {
        Self { inner: Some(value) }
    }

    pub fn get(&self) -> Option<&'a dyn Reflect> {
        self.inner
    }

    pub fn is_none(&self) -> bool {
        self.inner.is_none()
    }

    pub fn kind(&self) -> Option<Kind> {
        self.inner.map(|value| value.kind())
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.inner?.as_any().downcast_ref::<T>()
    }

    /// Whether both values refer to the same object.
    ///
    /// A record and its first field may share an address, so the types are compared too.
    pub fn ptr_eq(&self, other: &Value<'_>) -> bool {
        match (self.inner, other.inner) {
            (Some(a), Some(b)) => {
                ptr::eq(a as *const _ as *const u8, b as *const _ as *const u8)
                    && (*a.as_any()).type_id() == (*b.as_any()).type_id()
            }
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a> From<&'a dyn Reflect> for Value<'a> {
    fn from(value: &'a dyn Reflect) -> Self {
        Self::new(value)
    }
}

impl<'a> Debug for Value<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            Some(value) => Debug::fmt(value, f),
            None => f.write_str("<none>"),
        }
    }
}
