// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the TableModel derive.
//!
//! Produces [`ModelDef`], the single data structure consumed by code
//! generation: resolved table identity plus one [`FieldDef`] per named
//! struct field.

mod attrs;
mod container;
mod field;

pub use attrs::TableAttrs;
use convert_case::Case;
pub use container::Container;
use darling::FromDeriveInput;
pub use field::FieldDef;
use syn::{DeriveInput, Ident};

/// Complete parsed model definition.
///
/// Table identity is already resolved here: a missing or blank `name`
/// falls back to the struct's own name, a missing or blank `schema` to
/// `dbo`. Code generation never re-applies fallbacks.
#[derive(Debug)]
pub struct ModelDef {
    /// Struct identifier (e.g. `Order`).
    pub ident: Ident,

    /// Resolved table name.
    pub table: String,

    /// Resolved schema name.
    pub schema: String,

    /// Column case convention from `rename_all`, when declared.
    pub rename_all: Option<Case>,

    /// All field definitions in declaration order.
    pub fields: Vec<FieldDef>
}

impl ModelDef {
    /// Parse a model definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to a non-struct or a struct without named fields
    /// - Unknown `rename_all` convention
    /// - Invalid `#[field(...)]` attribute values
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = TableAttrs::from_derive_input(input)?;

        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom(
                        "TableModel requires named fields"
                    )
                    .with_span(&input.ident));
                }
            },
            _ => {
                return Err(darling::Error::custom(
                    "TableModel can only be derived for structs"
                )
                .with_span(&input.ident));
            }
        };

        let rename_all = match &attrs.rename_all {
            Some(value) => Some(attrs::parse_rename_all(value).ok_or_else(|| {
                darling::Error::custom(format!(
                    "unknown rename_all convention `{value}`; expected one of \
                     PascalCase, camelCase, snake_case, kebab-case"
                ))
                .with_span(&input.ident)
            })?),
            None => None
        };

        Ok(Self {
            ident: attrs.ident.clone(),
            table: non_blank(attrs.name).unwrap_or_else(|| attrs.ident.to_string()),
            schema: non_blank(attrs.schema).unwrap_or_else(|| "dbo".to_string()),
            rename_all,
            fields
        })
    }

    /// Get the model name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Fields that make it into the generated registry.
    pub fn registry_fields(&self) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| !f.skip).collect()
    }
}

/// Treat empty and whitespace-only attribute values as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
