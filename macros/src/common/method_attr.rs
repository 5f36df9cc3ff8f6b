//! `#[typed(...)]` attribute parsing
//!
//! ```ignore
//! #[typed(Equal = Point::equal, Norm = Self::norm)]
//! ```

use syn::{Attribute, Expr, Ident};

/// Name of the helper attribute.
pub const TYPED_ATTR: &str = "typed";

/// One `Name = path` registration.
pub struct MethodAttr {
    pub name: Ident,
    pub func: Expr,
}

impl MethodAttr {
    /// Registered method name, as seen by lookups.
    pub fn name_str(&self) -> String {
        self.name.to_string()
    }
}

/// Collect every registration across all `#[typed(...)]` attributes.
///
/// Rejects non-identifier keys and duplicate names.
pub fn parse_method_attrs(attrs: &[Attribute]) -> syn::Result<Vec<MethodAttr>> {
    let mut methods: Vec<MethodAttr> = Vec::new();

    for attr in attrs.iter().filter(|a| a.path().is_ident(TYPED_ATTR)) {
        attr.parse_nested_meta(|meta| {
            let Some(name) = meta.path.get_ident().cloned() else {
                return Err(meta.error("expected a method name, e.g. `Equal = Self::equal`"));
            };
            if methods.iter().any(|m| m.name == name) {
                return Err(meta.error(format!("method `{name}` registered twice")));
            }
            let func: Expr = meta.value()?.parse()?;
            methods.push(MethodAttr { name, func });
            Ok(())
        })?;
    }

    Ok(methods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_multiple() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[typed(Equal = Point::equal, Norm = Self::norm)]),
            parse_quote!(#[derive(Debug)]),
            parse_quote!(#[typed(Scale = |p: &Point, k: &u32| p.id * k)]),
        ];
        let methods = parse_method_attrs(&attrs).unwrap();
        let names: Vec<String> = methods.iter().map(MethodAttr::name_str).collect();
        assert_eq!(names, ["Equal", "Norm", "Scale"]);
    }

    #[test]
    fn test_rejects_duplicates() {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[typed(Equal = Point::equal)]),
            parse_quote!(#[typed(Equal = Point::other)]),
        ];
        let err = parse_method_attrs(&attrs).err().unwrap();
        assert!(err.to_string().contains("registered twice"));
    }

    #[test]
    fn test_rejects_path_keys() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[typed(a::Equal = Point::equal)])];
        assert!(parse_method_attrs(&attrs).is_err());
    }
}
