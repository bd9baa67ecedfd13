// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Doc comment extraction.
//!
//! Rust stores `///` comments as `#[doc = "..."]` attributes. The first
//! non-empty line of a field's doc comment becomes its registered
//! description, which keeps rustdoc and the metadata registry in sync
//! without a second attribute.

use syn::{Attribute, Expr, ExprLit, Lit, Meta};

/// Extract the summary line of a doc comment.
///
/// Returns the first non-blank `#[doc = "..."]` line, trimmed, or `None`
/// when the item carries no doc comment.
pub fn extract_doc_summary(attrs: &[Attribute]) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(doc_line)
        .map(|line| line.trim().to_string())
        .find(|line| !line.is_empty())
}

/// Literal value of a single `#[doc = "..."]` attribute.
fn doc_line(attr: &Attribute) -> Option<String> {
    if let Meta::NameValue(meta) = &attr.meta
        && let Expr::Lit(ExprLit {
            lit: Lit::Str(lit_str),
            ..
        }) = &meta.value
    {
        return Some(lit_str.value());
    }
    None
}
