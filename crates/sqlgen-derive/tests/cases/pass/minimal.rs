// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sqlgen_derive::{TableModel, sql};

/// Bare struct: table name and columns all fall back to identifiers.
#[derive(TableModel)]
pub struct Invoice {
    pub id: i64,
    pub total: i64,
}

fn main() {
    assert_eq!(Invoice::table().qualified(), "[dbo].[Invoice]");
    assert_eq!(Invoice::columns().len(), 2);
    let _ = sql::insert::<Invoice>(&[]);
}
