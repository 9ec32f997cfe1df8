use crate::{
    error::Error,
    kind::Kind,
    traits::{Handle, Reflect, View},
};
use alloc::{
    boxed::Box,
    collections::{BTreeMap, BTreeSet, VecDeque},
    rc::Rc,
    string::String,
    sync::Arc,
    vec::Vec,
};
use core::{any::Any, fmt::Debug, time::Duration};

/// Macro for implementing [`Reflect`] for types that are always leaves.
///
/// Also implements [`Handle`] that rejects the value passed by value.
macro_rules! impl_reflect_leaf {
    ($kind:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    $kind
                }
                fn view(&self) -> View<'_> {
                    View::Leaf(self)
                }
                fn as_any(&self) -> &dyn Any {
                    self
                }
            }

            impl<'a> Handle<'a> for $ty {
                fn follow(self) -> Result<&'a dyn Reflect, Error> {
                    Err(Error::ptr_required(&self))
                }
            }
        )*
    };
}

/// Same as [`impl_reflect_leaf`] but for collections generic over their items.
macro_rules! impl_reflect_collection {
    ($kind:expr => $($ty:ident < $($param:ident),+ >),* $(,)?) => {
        $(
            impl<$($param: Debug + 'static),+> Reflect for $ty<$($param),+> {
                fn kind(&self) -> Kind {
                    $kind
                }
                fn view(&self) -> View<'_> {
                    View::Leaf(self)
                }
                fn as_any(&self) -> &dyn Any {
                    self
                }
            }

            impl<'a, $($param: Debug + 'static),+> Handle<'a> for $ty<$($param),+> {
                fn follow(self) -> Result<&'a dyn Reflect, Error> {
                    Err(Error::ptr_required(&self))
                }
            }
        )*
    };
}

/// Macro for implementing [`Reflect`] for smart pointers.
macro_rules! impl_reflect_ptr {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $ty<T> {
                fn kind(&self) -> Kind {
                    Kind::Ptr
                }
                fn view(&self) -> View<'_> {
                    View::Ref(Some(&**self))
                }
                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

impl_reflect_leaf!(Kind::Unit => ());
impl_reflect_leaf!(Kind::Bool => bool);
impl_reflect_leaf!(Kind::Uint => u8, u16, u32, u64, u128, usize);
impl_reflect_leaf!(Kind::Int => i8, i16, i32, i64, i128, isize);
impl_reflect_leaf!(Kind::Float => f32, f64);
impl_reflect_leaf!(Kind::Char => char);
impl_reflect_leaf!(Kind::Str => String);
impl_reflect_leaf!(Kind::Other => Duration);

impl_reflect_collection!(Kind::Seq => Vec<T>, VecDeque<T>, BTreeSet<T>);
impl_reflect_collection!(Kind::Map => BTreeMap<K, V>);

impl_reflect_ptr!(Box, Rc, Arc);

impl Reflect for &'static str {
    fn kind(&self) -> Kind {
        Kind::Str
    }
    fn view(&self) -> View<'_> {
        View::Leaf(self)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Debug + 'static, const N: usize> Reflect for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Array
    }
    fn view(&self) -> View<'_> {
        View::Leaf(self)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `None` is an absent reference, `Some` is transparent.
impl<T: Reflect> Reflect for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Ptr
    }
    fn view(&self) -> View<'_> {
        match self {
            Some(value) => value.view(),
            None => View::Ref(None),
        }
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use super::*;
    use std::{
        collections::{HashMap, HashSet},
        time::SystemTime,
    };

    impl_reflect_leaf!(Kind::Other => SystemTime);

    impl_reflect_collection!(Kind::Seq => HashSet<T>);
    impl_reflect_collection!(Kind::Map => HashMap<K, V>);
}
