// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sqlgen_derive::TableModel;

/// Every attribute key in one place.
#[derive(TableModel)]
#[table(name = "orders", schema = "sales", rename_all = "camelCase")]
pub struct Order {
    pub id: i64,

    /// Name shown on the invoice.
    #[field(label = "Customer")]
    pub customer_name: String,

    #[field(column = "CreatTime")]
    pub created_at: i64,

    #[field(skip)]
    pub cached_total: i64,
}

fn main() {
    assert_eq!(Order::table().qualified(), "[sales].[orders]");
    assert_eq!(Order::field("customer_name").unwrap().column, "customerName");
    assert_eq!(Order::field("created_at").unwrap().column, "CreatTime");
    assert_eq!(Order::display_label("customer_name").unwrap(), "Customer");
    assert_eq!(
        Order::description("customer_name").unwrap(),
        "Name shown on the invoice."
    );
    assert!(Order::field("cached_total").is_err());
}
