// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! TableModel derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! model.rs (orchestrator)
//! │
//! ├── parse/          → Attribute parsing
//! │   ├── attrs.rs    → #[table(...)] (darling)
//! │   ├── field.rs    → #[field(...)] + doc-comment descriptions
//! │   └── container.rs → list/map classification of field types
//! │
//! └── codegen.rs      → impl sqlgen_core::TableModel emission
//! ```

pub mod codegen;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::ModelDef;

/// Main entry point for the TableModel derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ModelDef::from_derive_input(&input) {
        Ok(model) => codegen::generate(&model).into(),
        Err(err) => err.write_errors().into()
    }
}
