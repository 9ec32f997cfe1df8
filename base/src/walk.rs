//! Recursive field walker.
//!
//! Keys and values are collected by two separate traversals.
//! Both of them classify fields with [`step`], so they always skip the same fields and stay positionally aligned.

use crate::{
    error::Error,
    field::Field,
    kind::Kind,
    name::field_name,
    traits::{Record, Reflect, View},
    value::Value,
};
use alloc::{string::String, vec::Vec};

/// Value of a field after following at most one level of indirection.
#[derive(Clone, Copy, Debug)]
pub enum Resolved<'a> {
    /// Reference is absent.
    Absent,
    Record {
        record: &'a dyn Record,
        /// The record itself, never the wrapper it was reached through.
        value: &'a dyn Reflect,
    },
    Leaf(&'a dyn Reflect),
}

/// Follow a single level of indirection.
///
/// A reference to a reference is a leaf.
pub fn resolve(value: &dyn Reflect) -> Resolved<'_> {
    match value.view() {
        View::Record(record) => Resolved::Record {
            record,
            value: record.as_reflect(),
        },
        View::Leaf(leaf) => Resolved::Leaf(leaf),
        View::Ref(None) => Resolved::Absent,
        View::Ref(Some(target)) => match target.view() {
            View::Record(record) => Resolved::Record {
                record,
                value: record.as_reflect(),
            },
            View::Leaf(leaf) => Resolved::Leaf(leaf),
            View::Ref(_) => Resolved::Leaf(target),
        },
    }
}

/// Check that the target of the top-level reference is a record.
pub fn check_record(target: &dyn Reflect) -> Result<&dyn Record, Error> {
    match target.view() {
        View::Record(record) => Ok(record),
        View::Ref(None) => Err(Error::invalid_value(target)),
        View::Ref(Some(_)) | View::Leaf(_) => Err(Error::invalid_kind(Kind::Struct, target.kind())),
    }
}

/// Contribution of a single field to the flat output.
#[derive(Clone, Copy, Debug)]
pub enum Step<'a> {
    Skip,
    Leaf(Value<'a>),
    Nested {
        record: &'a dyn Record,
        value: &'a dyn Reflect,
    },
}

pub fn step<'a>(field: &Field<'a>) -> Step<'a> {
    if !field.info.exported {
        log::trace!("skip hidden field `{}`", field.info.name);
        return Step::Skip;
    }
    let value = match field.value {
        Some(value) => value,
        None => return Step::Leaf(Value::NONE),
    };
    match resolve(value) {
        Resolved::Absent => {
            log::trace!("skip absent reference in field `{}`", field.info.name);
            Step::Skip
        }
        Resolved::Record { record, value } => Step::Nested { record, value },
        Resolved::Leaf(leaf) => Step::Leaf(Value::new(leaf)),
    }
}

/// Walker configured with the annotation name and the key delimiter.
#[derive(Clone, Copy, Debug)]
pub struct Walker<'b> {
    pub tag: &'b str,
    pub delimiter: &'b str,
}

impl<'b> Walker<'b> {
    pub fn new(tag: &'b str, delimiter: &'b str) -> Self {
        Self { tag, delimiter }
    }

    pub fn keys(&self, record: &dyn Record) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_keys(record, &mut Vec::new(), &mut keys);
        keys
    }

    pub fn values<'a>(&self, record: &'a dyn Record) -> Vec<Value<'a>> {
        let mut values = Vec::new();
        self.collect_values(record, &mut values);
        values
    }

    /// Append keys of `record` to `keys`, `path` holds segments of enclosing records.
    pub fn collect_keys(&self, record: &dyn Record, path: &mut Vec<&'static str>, keys: &mut Vec<String>) {
        for field in record.fields() {
            match step(&field) {
                Step::Skip => continue,
                Step::Leaf(_) => {
                    path.push(field_name(field.info, self.tag));
                    keys.push(path.join(self.delimiter));
                    path.pop();
                }
                Step::Nested { record: nested, .. } => {
                    path.push(field_name(field.info, self.tag));
                    let len = keys.len();
                    self.collect_keys(nested, path, keys);
                    if keys.len() == len {
                        log::trace!("collapse empty record in field `{}`", field.info.name);
                        keys.push(path.join(self.delimiter));
                    }
                    path.pop();
                }
            }
        }
    }

    /// Append values of `record` to `values`.
    pub fn collect_values<'a>(&self, record: &'a dyn Record, values: &mut Vec<Value<'a>>) {
        for field in record.fields() {
            match step(&field) {
                Step::Skip => continue,
                Step::Leaf(value) => values.push(value),
                Step::Nested { record: nested, value } => {
                    let len = values.len();
                    self.collect_values(nested, values);
                    if values.len() == len {
                        values.push(Value::new(value));
                    }
                }
            }
        }
    }
}
