use core::fmt;

/// Shape of a reflected value.
///
/// Used only for diagnostics. The walker decides what to do with a value from its [`View`](crate::traits::View).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    Unit,
    Bool,
    /// Signed integer of any width.
    Int,
    /// Unsigned integer of any width.
    Uint,
    Float,
    Char,
    Str,
    /// Growable sequence or set.
    Seq,
    /// Fixed-size array.
    Array,
    Map,
    /// Reference-like value: `Box`, `Rc`, `Arc` or `Option`.
    Ptr,
    /// Record with named fields.
    Struct,
    /// Anything else.
    Other,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Unit => "unit",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::Str => "str",
            Kind::Seq => "seq",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Ptr => "ptr",
            Kind::Struct => "struct",
            Kind::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
