use syn::{
    ext::IdentExt,
    parse::Error as ParseError,
    punctuated::Punctuated,
    spanned::Spanned,
    Field, Index, Lit, LitStr, Member, Meta, Token, Type, Visibility,
};

/// Field properties collected from the declaration and `#[flat(..)]` attributes.
#[derive(Clone)]
pub struct FieldInfo {
    /// Declared name, index for tuple fields.
    pub name: String,
    pub member: Member,
    pub ty: Type,
    pub tags: Vec<(String, LitStr)>,
    pub exported: bool,
    pub opaque: bool,
}

fn parse_lit_str(lit: &Lit) -> Result<LitStr, ParseError> {
    if let Lit::Str(lit_str) = lit {
        Ok(lit_str.clone())
    } else {
        Err(ParseError::new(lit.span(), "annotation requires str value"))
    }
}

impl FieldInfo {
    pub fn parse(index: usize, field: &Field) -> Result<Self, ParseError> {
        let (name, member) = match &field.ident {
            Some(ident) => (ident.unraw().to_string(), Member::Named(ident.clone())),
            None => (index.to_string(), Member::Unnamed(Index::from(index))),
        };
        let mut info = FieldInfo {
            name,
            member,
            ty: field.ty.clone(),
            tags: Vec::new(),
            exported: matches!(field.vis, Visibility::Public(_)),
            opaque: false,
        };

        for attr in field.attrs.iter().filter(|attr| attr.path.is_ident("flat")) {
            let items = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            for meta in &items {
                match meta {
                    Meta::Path(path) if path.is_ident("skip") => info.exported = false,
                    Meta::Path(path) if path.is_ident("opaque") => info.opaque = true,
                    Meta::NameValue(nv) => {
                        let key = match nv.path.get_ident() {
                            Some(ident) => ident.unraw().to_string(),
                            None => {
                                return Err(ParseError::new(
                                    nv.path.span(),
                                    "annotation name must be an identifier",
                                ))
                            }
                        };
                        if info.tags.iter().any(|(k, _)| *k == key) {
                            return Err(ParseError::new(
                                nv.span(),
                                format!("duplicate annotation `{}`", key),
                            ));
                        }
                        info.tags.push((key, parse_lit_str(&nv.lit)?));
                    }
                    _ => {
                        return Err(ParseError::new(
                            meta.span(),
                            "expected `skip`, `opaque` or `name = \"value\"`",
                        ))
                    }
                }
            }
        }

        Ok(info)
    }

    /// Whether the walker could read the value of the field.
    pub fn readable(&self) -> bool {
        self.exported && !self.opaque
    }
}
