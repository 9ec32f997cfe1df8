use crate::info::FieldInfo;
use syn::{parse::Error as ParseError, Data, DeriveInput};

#[derive(Clone)]
pub struct Context {
    pub fields: Vec<FieldInfo>,
}

impl Context {
    pub fn new(input: &DeriveInput) -> Result<Self, ParseError> {
        let fields = match &input.data {
            Data::Struct(struct_data) => &struct_data.fields,
            Data::Enum(enum_data) => {
                return Err(ParseError::new(
                    enum_data.enum_token.span,
                    "`Record` can only be derived for structs",
                ))
            }
            Data::Union(union_data) => {
                return Err(ParseError::new(
                    union_data.union_token.span,
                    "`Record` can only be derived for structs",
                ))
            }
        };

        Ok(Context {
            fields: fields
                .iter()
                .enumerate()
                .map(|(index, field)| FieldInfo::parse(index, field))
                .collect::<Result<_, _>>()?,
        })
    }
}
