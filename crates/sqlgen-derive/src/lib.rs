// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # sqlgen-derive
//!
//! One crate, everything needed. Re-exports:
//! - [`TableModel`] derive macro from `sqlgen-derive-impl`
//! - All types from `sqlgen-core` ([`TableRef`], [`FieldMeta`],
//!   [`MetaError`], the [`sql`] builders, the [`shape`] model)

pub use sqlgen_core::*;
pub use sqlgen_derive_impl::TableModel;
