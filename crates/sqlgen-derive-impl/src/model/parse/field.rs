// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! Handles `#[field(column = "...", label = "...", skip)]` plus the doc
//! comment that becomes the field description.

use convert_case::{Case, Casing};
use syn::{Attribute, Field, Ident, LitStr, Meta, Type};

use super::Container;
use crate::utils::docs;

/// Field definition with all parsed attributes.
///
/// # Attribute Keys
///
/// | Field | Attribute | Effect |
/// |-------|-----------|--------|
/// | `column` | `#[field(column = "...")]` | Explicit column name |
/// | `label` | `#[field(label = "...")]` | Human-readable display label |
/// | `skip` | `#[field(skip)]` | Exclude from the field registry |
///
/// The description comes from the field's doc comment, not from an
/// attribute key.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier (e.g., `id`, `customer_name`).
    pub ident: Ident,

    /// Field type, used for container classification.
    pub ty: Type,

    /// Explicit column override (`#[field(column = "...")]`).
    ///
    /// Takes precedence over the container's `rename_all` convention.
    pub column: Option<String>,

    /// Display label (`#[field(label = "...")]`).
    pub label: Option<String>,

    /// Exclude from the field registry (`#[field(skip)]`).
    pub skip: bool,

    /// First line of the field's doc comment.
    pub description: Option<String>,

    /// Structural category of the field type.
    pub container: Container
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns an error spanned to the attribute when `column` or `label`
    /// carry anything other than a string literal, or when an unnamed
    /// field slips past darling's `supports(struct_named)` guard.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| darling::Error::custom("named field required").with_span(field))?;
        let ty = field.ty.clone();

        let mut column = None;
        let mut label = None;
        let mut skip = false;

        for attr in &field.attrs {
            if attr.path().is_ident("field") {
                parse_field_attr(attr, &mut column, &mut label, &mut skip)?;
            }
        }

        Ok(Self {
            ident,
            container: Container::classify(&ty),
            ty,
            column,
            label,
            skip,
            description: docs::extract_doc_summary(&field.attrs)
        })
    }

    /// Field name as a string.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Resolve the column name for this field.
    ///
    /// Precedence:
    /// 1. Explicit `#[field(column = "...")]`
    /// 2. Identifier converted through the container's `rename_all` case
    /// 3. Identifier verbatim
    pub fn column_name(&self, rename_all: Option<Case>) -> String {
        if let Some(column) = &self.column {
            return column.clone();
        }
        let name = self.name_str();
        match rename_all {
            Some(case) => name.to_case(case),
            None => name
        }
    }
}

/// Parse `#[field(column = "...", label = "...", skip)]`.
///
/// Unknown keys are rejected with a spanned error so typos like
/// `#[field(colunm = "...")]` fail the build instead of silently
/// falling back to the identifier.
fn parse_field_attr(
    attr: &Attribute,
    column: &mut Option<String>,
    label: &mut Option<String>,
    skip: &mut bool
) -> darling::Result<()> {
    if let Meta::List(meta_list) = &attr.meta {
        meta_list.parse_nested_meta(|meta| {
            if meta.path.is_ident("column") {
                let value: LitStr = meta.value()?.parse()?;
                *column = Some(value.value());
            } else if meta.path.is_ident("label") {
                let value: LitStr = meta.value()?.parse()?;
                *label = Some(value.value());
            } else if meta.path.is_ident("skip") {
                *skip = true;
            } else {
                return Err(meta.error("unknown key; expected `column`, `label`, or `skip`"));
            }
            Ok(())
        })?;
    }
    Ok(())
}
