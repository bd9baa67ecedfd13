// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! This module defines the internal [`TableAttrs`] structure used for
//! parsing `#[table(...)]` attributes. This is an implementation detail;
//! the public API uses [`ModelDef`](super::ModelDef).
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | struct name | Table name |
//! | `schema` | No | `"dbo"` | Schema name |
//! | `rename_all` | No | — | Column case convention |
//!
//! The whole attribute is optional: a struct with no `#[table]` at all is
//! the common fallback case, not an error.

use convert_case::Case;
use darling::FromDeriveInput;
use syn::Ident;

/// Struct-level attributes parsed from `#[table(...)]`.
///
/// Raw attribute values; fallbacks are applied by
/// [`ModelDef`](super::ModelDef), not here.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(table), supports(struct_named), allow_unknown_fields)]
pub struct TableAttrs {
    /// Struct identifier (e.g. `Order`).
    pub ident: Ident,

    /// Declared table name, when present.
    #[darling(default)]
    pub name: Option<String>,

    /// Declared schema name, when present.
    #[darling(default)]
    pub schema: Option<String>,

    /// Column case convention, when present.
    ///
    /// See [`parse_rename_all`] for the accepted spellings.
    #[darling(default)]
    pub rename_all: Option<String>
}

/// Map a `rename_all` spelling to its [`Case`].
///
/// Spellings follow the serde convention of naming the case by example.
/// Returns `None` for anything unrecognized.
pub fn parse_rename_all(value: &str) -> Option<Case> {
    match value {
        "PascalCase" => Some(Case::Pascal),
        "camelCase" => Some(Case::Camel),
        "snake_case" => Some(Case::Snake),
        "kebab-case" => Some(Case::Kebab),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    #[test]
    fn parses_all_keys() {
        let input: DeriveInput = syn::parse_quote! {
            #[table(name = "Order", schema = "sales", rename_all = "PascalCase")]
            pub struct Order {
                pub id: i64,
            }
        };
        let attrs = TableAttrs::from_derive_input(&input).unwrap();
        assert_eq!(attrs.name.as_deref(), Some("Order"));
        assert_eq!(attrs.schema.as_deref(), Some("sales"));
        assert_eq!(attrs.rename_all.as_deref(), Some("PascalCase"));
    }

    #[test]
    fn absent_attribute_yields_defaults() {
        let input: DeriveInput = syn::parse_quote! {
            pub struct Order {
                pub id: i64,
            }
        };
        let attrs = TableAttrs::from_derive_input(&input).unwrap();
        assert!(attrs.name.is_none());
        assert!(attrs.schema.is_none());
        assert!(attrs.rename_all.is_none());
    }

    #[test]
    fn rename_all_spellings() {
        assert_eq!(parse_rename_all("PascalCase"), Some(Case::Pascal));
        assert_eq!(parse_rename_all("camelCase"), Some(Case::Camel));
        assert_eq!(parse_rename_all("snake_case"), Some(Case::Snake));
        assert_eq!(parse_rename_all("kebab-case"), Some(Case::Kebab));
        assert_eq!(parse_rename_all("PASCAL_CASE"), None);
    }
}
