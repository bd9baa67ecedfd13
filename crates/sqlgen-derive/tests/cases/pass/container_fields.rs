// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use sqlgen_derive::TableModel;

/// Container fields stay in the registry but never become columns.
#[derive(TableModel)]
pub struct Shipment {
    pub id: i64,

    #[field(label = "Tags")]
    pub tags: Vec<String>,

    pub extras: HashMap<String, String>,

    pub notes: Option<Vec<String>>,
}

fn main() {
    assert_eq!(Shipment::fields().len(), 4);
    let columns: Vec<&str> = Shipment::columns().iter().map(|f| f.column).collect();
    assert_eq!(columns, ["id"]);
    assert_eq!(Shipment::display_label("tags").unwrap(), "Tags");
}
