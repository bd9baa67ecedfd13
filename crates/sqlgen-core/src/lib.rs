// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core metadata types and SQL statement builders for sqlgen.
//!
//! This crate provides the runtime half of sqlgen: the type descriptor
//! model consumed by generated code, and the statement builders that turn
//! that metadata into parameterized SQL text. It can also be used
//! standalone with hand-written [`TableModel`] implementations.
//!
//! # Overview
//!
//! - [`TableModel`] — type descriptor trait: table identity plus an ordered
//!   field registry
//! - [`TableRef`], [`FieldMeta`] — the metadata building blocks
//! - [`shape`] — structural type descriptions and the assignability test
//!   used to classify container fields
//! - [`sql`] — the statement builders (insert, update, delete, lookups,
//!   counting, windowed paging)
//! - [`MetaError`] — selector and required-attribute failures
//! - [`prelude`] — convenient re-exports
//!
//! # Usage
//!
//! Most users derive the descriptor with `sqlgen-derive` and only call the
//! builders:
//!
//! ```rust,ignore
//! use sqlgen_core::sql;
//!
//! let stmt = sql::insert::<Order>(&[]);
//! let page = sql::query_page::<Order>(&QueryOptions::default(), Page::default());
//! ```
//!
//! Every operation is synchronous and side-effect-free: all metadata is
//! `'static`, so calls are idempotent and safe from any thread.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod meta;
pub mod prelude;
pub mod shape;
pub mod sql;

pub use error::MetaError;
pub use meta::{DEFAULT_SCHEMA, DEFAULT_SORT_FIELD, FieldMeta, TableModel, TableRef};
