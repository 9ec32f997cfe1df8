use crate::{
    error::Error,
    field::FieldInfo,
    name,
    traits::{Handle, Record},
    value::Value,
    walk::{check_record, Walker},
};
use alloc::{borrow::Cow, collections::BTreeMap, string::String, vec::Vec};

/// Default annotation name used to override field names.
pub const DEFAULT_TAG: &str = "key";
/// Default key delimiter, segments are concatenated.
pub const DEFAULT_DELIMITER: &str = "";

/// Builder with the default configuration.
pub static DEFAULT: Builder = Builder::from_static(DEFAULT_TAG, DEFAULT_DELIMITER);

/// Flattens records into keys and values.
///
/// `tag` is the name of the field annotation that overrides the field name, e.g. `key` for `#[flat(key = "foo")]`.
/// `delimiter` is inserted between key segments of nested records.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Builder {
    tag: Cow<'static, str>,
    delimiter: Cow<'static, str>,
}

impl Builder {
    pub fn new(tag: impl Into<Cow<'static, str>>, delimiter: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            delimiter: delimiter.into(),
        }
    }

    pub const fn from_static(tag: &'static str, delimiter: &'static str) -> Self {
        Self {
            tag: Cow::Borrowed(tag),
            delimiter: Cow::Borrowed(delimiter),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Key segment of the field.
    pub fn field_name(&self, info: &FieldInfo) -> &'static str {
        name::field_name(info, &self.tag)
    }

    fn walker(&self) -> Walker<'_> {
        Walker::new(&self.tag, &self.delimiter)
    }

    fn record<'a, H: Handle<'a>>(handle: H) -> Result<&'a dyn Record, Error> {
        let result = handle.follow().and_then(check_record);
        if let Err(err) = &result {
            log::debug!("rejected argument: {}", err);
        }
        result
    }

    /// Flat keys of the record in field declaration order.
    pub fn keys<'a, H: Handle<'a>>(&self, handle: H) -> Result<Vec<String>, Error> {
        Ok(self.walker().keys(Self::record(handle)?))
    }

    /// Flat values of the record, aligned with [`keys`](Self::keys).
    pub fn values<'a, H: Handle<'a>>(&self, handle: H) -> Result<Vec<Value<'a>>, Error> {
        Ok(self.walker().values(Self::record(handle)?))
    }

    /// Keys zipped with values into a map.
    ///
    /// If different fields produce the same key then the last one wins.
    pub fn map<'a, H: Handle<'a>>(&self, handle: H) -> Result<BTreeMap<String, Value<'a>>, Error> {
        Ok(self.entries(handle)?.into_iter().collect())
    }

    /// Keys zipped with values, in field declaration order.
    pub fn entries<'a, H: Handle<'a>>(&self, handle: H) -> Result<Vec<(String, Value<'a>)>, Error> {
        let record = Self::record(handle)?;
        let walker = self.walker();
        let keys = walker.keys(record);
        let values = walker.values(record);
        debug_assert_eq!(keys.len(), values.len());
        Ok(keys.into_iter().zip(values).collect())
    }
}

impl Default for Builder {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

/// [`Builder::keys`] with the [`DEFAULT`] builder.
pub fn keys<'a, H: Handle<'a>>(handle: H) -> Result<Vec<String>, Error> {
    DEFAULT.keys(handle)
}

/// [`Builder::values`] with the [`DEFAULT`] builder.
pub fn values<'a, H: Handle<'a>>(handle: H) -> Result<Vec<Value<'a>>, Error> {
    DEFAULT.values(handle)
}

/// [`Builder::map`] with the [`DEFAULT`] builder.
pub fn map<'a, H: Handle<'a>>(handle: H) -> Result<BTreeMap<String, Value<'a>>, Error> {
    DEFAULT.map(handle)
}

/// [`Builder::entries`] with the [`DEFAULT`] builder.
pub fn entries<'a, H: Handle<'a>>(handle: H) -> Result<Vec<(String, Value<'a>)>, Error> {
    DEFAULT.entries(handle)
}
