use crate::field::FieldInfo;

/// Resolves the key segment of a field.
///
/// Non-empty annotation `tag` takes precedence over the declared field name.
pub fn field_name(info: &FieldInfo, tag: &str) -> &'static str {
    match info.tag(tag) {
        Some(name) if !name.is_empty() => name,
        _ => info.name,
    }
}
