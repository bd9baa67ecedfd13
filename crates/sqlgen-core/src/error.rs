// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type for metadata resolution.
//!
//! Absent configuration (no table mapping, no label, no description) is
//! never an error — those cases resolve through documented fallbacks.
//! Errors here signal caller mistakes: a selector naming a field the model
//! does not have, or a required attribute that was never declared.

use thiserror::Error;

/// Failures raised by [`TableModel`](crate::TableModel) lookups.
///
/// Statement builders never produce these: generation is total. Only the
/// selector-based accessors (`field`, `display_label_required`,
/// `description_required`) can fail, and both variants name the offending
/// member so the mistake is visible at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    /// A field selector did not match any declared field.
    ///
    /// Raised instead of silently returning a default: an unknown selector
    /// is a programming error, not a runtime data condition.
    #[error("invalid field selector `{selector}` on model `{model}`")]
    InvalidFieldSelector {
        /// Model the lookup ran against.
        model:    &'static str,
        /// The selector that matched nothing.
        selector: String
    },

    /// A required attribute is missing from a field.
    ///
    /// Raised by the `*_required` accessors when the attribute was never
    /// declared on the member.
    #[error("attribute `{attribute}` is required on field `{field}` of model `{model}`")]
    MissingAttribute {
        /// Model the lookup ran against.
        model:     &'static str,
        /// Attribute kind that is missing (`label` or `description`).
        attribute: &'static str,
        /// Field that lacks the attribute.
        field:     &'static str
    }
}
