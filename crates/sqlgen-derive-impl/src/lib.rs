// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # sqlgen-derive-impl
//!
//! Internal proc-macro crate backing `sqlgen-derive`. Use `sqlgen-derive`
//! directly; this crate's only export is the [`TableModel`] derive macro.
//!
//! The macro compiles a struct's `#[table(...)]` and `#[field(...)]`
//! attributes into a static `sqlgen_core::TableModel` implementation: the
//! table identity and an ordered field registry, resolved once at compile
//! time instead of scanned at run time.

mod model;
mod utils;

use proc_macro::TokenStream;

/// Derive macro generating a `sqlgen_core::TableModel` implementation.
///
/// # Struct-Level `#[table(...)]`
///
/// The attribute is optional. Without it, the table name falls back to the
/// struct's own name in the default `dbo` schema.
///
/// | Key | Default | Description |
/// |-----|---------|-------------|
/// | `name` | struct name | Table name |
/// | `schema` | `"dbo"` | Schema name |
/// | `rename_all` | — | Column case convention: `"PascalCase"`, `"camelCase"`, `"snake_case"`, `"kebab-case"` |
///
/// # Field-Level `#[field(...)]`
///
/// | Key | Description |
/// |-----|-------------|
/// | `column = "..."` | Column name override (wins over `rename_all`) |
/// | `label = "..."` | Display label |
/// | `skip` | Exclude the field from the registry entirely |
///
/// A field's description is its doc comment summary.
///
/// # Example
///
/// ```rust,ignore
/// use sqlgen_derive::TableModel;
///
/// #[derive(TableModel)]
/// #[table(name = "Order", schema = "sales", rename_all = "PascalCase")]
/// pub struct Order {
///     pub id: i64,
///
///     /// Billing name of the customer.
///     #[field(label = "Customer")]
///     pub customer_name: String,
///
///     #[field(column = "CreatTime")]
///     pub created: String,
///
///     // container fields stay in the registry but are not columns
///     pub lines: Vec<String>,
///
///     #[field(skip)]
///     pub checksum: u64,
/// }
/// ```
///
/// # Errors
///
/// Fails to compile on enums, unions, tuple structs, unit structs, and
/// unknown `rename_all` conventions.
#[proc_macro_derive(TableModel, attributes(table, field))]
pub fn derive_table_model(input: TokenStream) -> TokenStream {
    model::derive(input)
}
