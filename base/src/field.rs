use crate::traits::{Record, Reflect};
use core::iter::FusedIterator;

/// Static description of a record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    /// Declared name of the field.
    pub name: &'static str,
    /// Field annotations, `(attribute, value)` pairs in the order of declaration.
    pub tags: &'static [(&'static str, &'static str)],
    /// Whether the field is visible to the walker.
    pub exported: bool,
}

impl FieldInfo {
    pub const fn new(name: &'static str, tags: &'static [(&'static str, &'static str)], exported: bool) -> Self {
        Self { name, tags, exported }
    }

    /// Value of the annotation `key`, if present.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

/// Field of a particular record instance.
#[derive(Clone, Copy, Debug)]
pub struct Field<'a> {
    pub info: &'static FieldInfo,
    /// `None` if the value is not readable.
    pub value: Option<&'a dyn Reflect>,
}

/// Iterator over record fields in declaration order.
#[derive(Clone)]
pub struct Fields<'a> {
    record: &'a dyn Record,
    infos: &'static [FieldInfo],
    index: usize,
}

impl<'a> Fields<'a> {
    pub fn new(record: &'a dyn Record) -> Self {
        Self {
            record,
            infos: record.field_infos(),
            index: 0,
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Field<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.infos.get(self.index)?;
        let value = self.record.field_value(self.index);
        self.index += 1;
        Some(Field { info, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.infos.len() - self.index;
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for Fields<'a> {}
impl<'a> FusedIterator for Fields<'a> {}

impl dyn Record {
    pub fn fields(&self) -> Fields<'_> {
        Fields::new(self)
    }
}
