// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sqlgen_core::prelude::*;
//! ```

pub use crate::{
    DEFAULT_SCHEMA, DEFAULT_SORT_FIELD, FieldMeta, MetaError, TableModel, TableRef,
    sql::{self, DeleteMode, Page, QueryOptions, SortDirection}
};
