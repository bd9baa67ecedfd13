// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `TableModel` implementation generation.
//!
//! Emits one `impl ::sqlgen_core::TableModel` block backed by a `static`
//! field registry, so metadata lookups cost a slice iteration instead of
//! any runtime scanning.
//!
//! # Generated Code
//!
//! For a struct like:
//!
//! ```rust,ignore
//! #[derive(TableModel)]
//! #[table(rename_all = "PascalCase")]
//! pub struct Order {
//!     pub id: i64,
//!     pub customer_name: String,
//! }
//! ```
//!
//! the macro generates:
//!
//! ```rust,ignore
//! #[automatically_derived]
//! impl ::sqlgen_core::TableModel for Order {
//!     fn model_name() -> &'static str { "Order" }
//!
//!     fn table() -> ::sqlgen_core::TableRef {
//!         ::sqlgen_core::TableRef::new("dbo", "Order")
//!     }
//!
//!     fn fields() -> &'static [::sqlgen_core::FieldMeta] {
//!         static FIELDS: [::sqlgen_core::FieldMeta; 2] = [
//!             ::sqlgen_core::FieldMeta::scalar("id").with_column("Id"),
//!             ::sqlgen_core::FieldMeta::scalar("customer_name")
//!                 .with_column("CustomerName"),
//!         ];
//!         &FIELDS
//!     }
//! }
//! ```
//!
//! All paths are absolute so the expansion works regardless of what the
//! caller has in scope.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{Container, FieldDef, ModelDef};

/// Generate the complete `TableModel` implementation.
pub fn generate(model: &ModelDef) -> TokenStream {
    let ident = &model.ident;
    let model_name = model.name_str();
    let schema = &model.schema;
    let table = &model.table;

    let registry = model.registry_fields();
    let len = registry.len();
    let metas: Vec<TokenStream> = registry
        .iter()
        .map(|field| field_meta(model, field))
        .collect();

    quote! {
        #[automatically_derived]
        impl ::sqlgen_core::TableModel for #ident {
            fn model_name() -> &'static str {
                #model_name
            }

            fn table() -> ::sqlgen_core::TableRef {
                ::sqlgen_core::TableRef::new(#schema, #table)
            }

            fn fields() -> &'static [::sqlgen_core::FieldMeta] {
                static FIELDS: [::sqlgen_core::FieldMeta; #len] = [
                    #(#metas),*
                ];
                &FIELDS
            }
        }
    }
}

/// Build the const-expression tokens for one registry entry.
///
/// Starts from [`FieldMeta::scalar`] and chains the const builders for
/// every deviation from the defaults, so the common case stays a single
/// call.
fn field_meta(model: &ModelDef, field: &FieldDef) -> TokenStream {
    let name = field.name_str();
    let column = field.column_name(model.rename_all);

    let mut tokens = quote! { ::sqlgen_core::FieldMeta::scalar(#name) };
    if column != name {
        tokens = quote! { #tokens.with_column(#column) };
    }
    if let Some(label) = &field.label {
        tokens = quote! { #tokens.with_label(#label) };
    }
    if let Some(description) = &field.description {
        tokens = quote! { #tokens.with_description(#description) };
    }
    if let Some(shape) = shape_tokens(field) {
        tokens = quote! { #tokens.with_shape(#shape) };
    }
    tokens
}

/// Shape override tokens for container fields, `None` for scalars.
///
/// The reference to the `closed` call is lifetime-extended inside the
/// `static FIELDS` initializer, so no named shape item is needed per
/// field.
fn shape_tokens(field: &FieldDef) -> Option<TokenStream> {
    let anchor = Container::anchor(&field.ty)?;
    let anchor = format_ident!("{anchor}");
    let ty = &field.ty;
    let ty_name = quote!(#ty).to_string().replace(' ', "");
    Some(quote! {
        &::sqlgen_core::shape::TypeShape::closed(#ty_name, &::sqlgen_core::shape::#anchor)
    })
}
