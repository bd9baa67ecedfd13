// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parameterized SQL statement builders.
//!
//! Every builder is a pure function over a [`TableModel`]'s metadata plus
//! per-call parameters, producing one statement string with `@field`
//! placeholders. Nothing here touches a connection: callers bind the
//! placeholder values themselves before execution.
//!
//! | Builder | Statement shape |
//! |---------|-----------------|
//! | [`insert`] | `insert into [s].[t] ([c],..) VALUES (@c,..)` |
//! | [`update`] | `UPDATE [s].[t] SET [c]=@c,.. where 1=1 ..` |
//! | [`update_partial`] | same, with an explicit field list |
//! | [`delete`] | soft `UPDATE .. SET isDeleted=true` or physical `DELETE FROM` |
//! | [`query_one`] | `Select [c],.. From [s].[t] Where key=@key` |
//! | [`query_count`] | `Select Count(*) From [s].[t] [Where 1=1 ..]` |
//! | [`query_all`] | unbounded `ROW_NUMBER()` window over the table |
//! | [`query_page`] | the same window with `RN BETWEEN start AND end` |
//!
//! The literal `where 1=1` lets callers always append `AND ...` without
//! special-casing the first condition.
//!
//! # Example
//!
//! ```rust
//! use sqlgen_core::{FieldMeta, TableModel, TableRef, sql};
//!
//! struct Order;
//!
//! impl TableModel for Order {
//!     fn model_name() -> &'static str {
//!         "Order"
//!     }
//!
//!     fn table() -> TableRef {
//!         TableRef::with_default_schema("Order")
//!     }
//!
//!     fn fields() -> &'static [FieldMeta] {
//!         static FIELDS: [FieldMeta; 2] =
//!             [FieldMeta::scalar("Id"), FieldMeta::scalar("CreatTime")];
//!         &FIELDS
//!     }
//! }
//!
//! let stmt = sql::insert::<Order>(&[]);
//! assert_eq!(
//!     stmt,
//!     "insert into [dbo].[Order] ([Id],[CreatTime]) VALUES (@Id,@CreatTime)"
//! );
//! ```

use std::fmt::Write;

use crate::{DEFAULT_SORT_FIELD, TableModel};

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    Asc,

    /// Descending order (Z-A, 9-0, newest first). The default: listings
    /// show newest rows first.
    #[default]
    Desc
}

impl SortDirection {
    /// Convert to SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC"
        }
    }
}

/// Delete policy: logical by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMode {
    /// Mark the row deleted via the `isDeleted` flag.
    #[default]
    Soft,

    /// Physically remove the row with `DELETE FROM`.
    Physical
}

/// Per-call parameters for the windowed query builders.
///
/// # Example
///
/// ```rust
/// use sqlgen_core::sql::{QueryOptions, SortDirection};
///
/// let opts = QueryOptions {
///     where_fragment: "AND Status=@Status",
///     ..QueryOptions::default()
/// };
/// assert_eq!(opts.sort_field, "CreatTime");
/// assert_eq!(opts.sort, SortDirection::Desc);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryOptions<'a> {
    /// Condition fragment appended after `where 1=1`; conventionally starts
    /// with `AND`. Empty means no filter.
    pub where_fragment: &'a str,

    /// Column to order the row-number window by.
    pub sort_field: &'a str,

    /// Window ordering direction.
    pub sort: SortDirection,

    /// Field names excluded from the projection, matched
    /// case-insensitively; unmatched names are ignored.
    pub exclude: &'a [&'a str]
}

impl Default for QueryOptions<'_> {
    fn default() -> Self {
        Self {
            where_fragment: "",
            sort_field: DEFAULT_SORT_FIELD,
            sort: SortDirection::default(),
            exclude: &[]
        }
    }
}

/// Page window for [`query_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page index.
    pub index: u32,

    /// Rows per page.
    pub size: u32
}

impl Page {
    /// Create a page window.
    pub const fn new(index: u32, size: u32) -> Self {
        Self {
            index,
            size
        }
    }

    /// Inclusive `RN` bounds for this page.
    ///
    /// Page 1 covers rows `1..=size`; page `n > 1` covers
    /// `n*size+1 ..= (n+1)*size`. The boundary is kept verbatim for output
    /// compatibility with existing consumers, even though it leaves the
    /// rows between `size` and `2*size` unreachable.
    pub const fn bounds(&self) -> (u64, u64) {
        let index = self.index as u64;
        let size = self.size as u64;
        if index <= 1 {
            (1, size)
        } else {
            (index * size + 1, (index + 1) * size)
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            index: 1,
            size:  20
        }
    }
}

/// Case-insensitive membership test for exclusion lists.
fn is_excluded(column: &str, exclude: &[&str]) -> bool {
    exclude.iter().any(|e| e.eq_ignore_ascii_case(column))
}

/// Column names minus exclusions, in declaration order.
fn included_columns<T: TableModel>(exclude: &[&str]) -> Vec<&'static str> {
    T::columns()
        .into_iter()
        .filter(|f| !is_excluded(f.column, exclude))
        .map(|f| f.column)
        .collect()
}

/// `where 1=1` with the caller's fragment appended when present.
fn where_tail(fragment: &str) -> String {
    if fragment.is_empty() {
        "where 1=1".to_string()
    } else {
        format!("where 1=1 {fragment}")
    }
}

/// Build an `INSERT` statement.
///
/// Emits one bracketed column and one `@` placeholder per included field,
/// in declaration order:
///
/// ```sql
/// insert into [dbo].[Order] ([Id],[CustomerName]) VALUES (@Id,@CustomerName)
/// ```
pub fn insert<T: TableModel>(exclude: &[&str]) -> String {
    let mut columns = String::new();
    let mut placeholders = String::new();
    for column in included_columns::<T>(exclude) {
        if !columns.is_empty() {
            columns.push(',');
            placeholders.push(',');
        }
        let _ = write!(columns, "[{column}]");
        let _ = write!(placeholders, "@{column}");
    }
    format!(
        "insert into {} ({columns}) VALUES ({placeholders})",
        T::table().qualified()
    )
}

/// Build a full-row `UPDATE` statement.
///
/// Every included field is assigned its own placeholder. The fragment is
/// appended after `where 1=1`:
///
/// ```sql
/// UPDATE [dbo].[Order] SET [Status]=@Status where 1=1 AND Id=@Id
/// ```
pub fn update<T: TableModel>(where_fragment: &str, exclude: &[&str]) -> String {
    let assignments: Vec<String> = included_columns::<T>(exclude)
        .into_iter()
        .map(|column| format!("[{column}]=@{column}"))
        .collect();
    format!(
        "UPDATE {} SET {} {}",
        T::table().qualified(),
        assignments.join(","),
        where_tail(where_fragment)
    )
}

/// Build a sparse `UPDATE` statement over an explicit field list.
///
/// Unlike [`update`], the columns come from the caller, not the resolver —
/// used when only a handful of fields change.
pub fn update_partial<T: TableModel>(fields: &[&str], where_fragment: &str) -> String {
    let assignments: Vec<String> = fields
        .iter()
        .map(|column| format!("[{column}]=@{column}"))
        .collect();
    format!(
        "UPDATE {} SET {} {}",
        T::table().qualified(),
        assignments.join(","),
        where_tail(where_fragment)
    )
}

/// Build a delete statement.
///
/// Deletion is logical by default: [`DeleteMode::Soft`] emits an `UPDATE`
/// setting the `isDeleted` flag, and only [`DeleteMode::Physical`] emits
/// `DELETE FROM`. The policy lives here, not at the call sites.
pub fn delete<T: TableModel>(where_fragment: &str, mode: DeleteMode) -> String {
    let table = T::table().qualified();
    let tail = where_tail(where_fragment);
    match mode {
        DeleteMode::Soft => format!("UPDATE {table} SET isDeleted=true {tail}"),
        DeleteMode::Physical => format!("DELETE FROM {table} {tail}")
    }
}

/// Build a single-row lookup by an arbitrary key field.
///
/// The key does not have to be a declared primary key — any column works:
///
/// ```sql
/// Select [Id],[CustomerName] From [dbo].[Order] Where OrderNo=@OrderNo
/// ```
pub fn query_one<T: TableModel>(key_field: &str, exclude: &[&str]) -> String {
    let columns: Vec<String> = included_columns::<T>(exclude)
        .into_iter()
        .map(|column| format!("[{column}]"))
        .collect();
    format!(
        "Select {} From {} Where {key_field}=@{key_field}",
        columns.join(","),
        T::table().qualified()
    )
}

/// Build a row-count statement.
///
/// `None` means no filter at all and omits the `Where` clause entirely;
/// `Some` keeps the clause even when the fragment itself is empty. The two
/// are deliberately distinct.
pub fn query_count<T: TableModel>(where_fragment: Option<&str>) -> String {
    let table = T::table().qualified();
    match where_fragment {
        Some(fragment) if fragment.is_empty() => {
            format!("Select Count(*) From {table} Where 1=1")
        }
        Some(fragment) => format!("Select Count(*) From {table} Where 1=1 {fragment}"),
        None => format!("Select Count(*) From {table}")
    }
}

/// Inner `ROW_NUMBER()` projection shared by the windowed queries.
fn window_select<T: TableModel>(projection: &str, opts: &QueryOptions<'_>) -> String {
    let mut inner = format!(
        "SELECT ROW_NUMBER() OVER (ORDER BY a.{} {}) AS RN,{projection} FROM {} a",
        opts.sort_field,
        opts.sort.as_sql(),
        T::table().qualified()
    );
    if !opts.where_fragment.is_empty() {
        let _ = write!(inner, " where 1=1 {}", opts.where_fragment);
    }
    inner
}

/// Build an unbounded windowed query.
///
/// Wraps the projection in a `ROW_NUMBER()` window exposing the implicit
/// `RN` column with no outer bound — callers may filter `RN` afterwards:
///
/// ```sql
/// SELECT * FROM (
///   SELECT ROW_NUMBER() OVER (ORDER BY a.CreatTime DESC) AS RN,Id,CustomerName
///   FROM [dbo].[Order] a
/// ) t
/// ```
pub fn query_all<T: TableModel>(opts: &QueryOptions<'_>) -> String {
    let projection = included_columns::<T>(opts.exclude).join(",");
    format!("SELECT * FROM ({}) t", window_select::<T>(&projection, opts))
}

/// Build a paged windowed query.
///
/// Same window as [`query_all`] bounded by `t.RN BETWEEN start AND end`,
/// with the bounds from [`Page::bounds`]. With no exclusions the inner
/// projection is `*`; with exclusions it is the filtered column list.
pub fn query_page<T: TableModel>(opts: &QueryOptions<'_>, page: Page) -> String {
    let projection = if opts.exclude.is_empty() {
        "*".to_string()
    } else {
        included_columns::<T>(opts.exclude).join(",")
    };
    let (start, end) = page.bounds();
    format!(
        "SELECT * FROM ({}) t WHERE t.RN BETWEEN {start} AND {end}",
        window_select::<T>(&projection, opts)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldMeta, TableRef, shape};

    struct Order;

    impl TableModel for Order {
        fn model_name() -> &'static str {
            "Order"
        }

        fn table() -> TableRef {
            TableRef::with_default_schema("Order")
        }

        fn fields() -> &'static [FieldMeta] {
            static FIELDS: [FieldMeta; 3] = [
                FieldMeta::scalar("Id"),
                FieldMeta::scalar("CustomerName"),
                FieldMeta::scalar("CreatTime")
            ];
            &FIELDS
        }
    }

    struct Shipment;

    impl TableModel for Shipment {
        fn model_name() -> &'static str {
            "Shipment"
        }

        fn table() -> TableRef {
            TableRef::new("logistics", "Shipments")
        }

        fn fields() -> &'static [FieldMeta] {
            static FIELDS: [FieldMeta; 3] = [
                FieldMeta::scalar("Id"),
                FieldMeta::scalar("Parcels").with_shape(&shape::VEC),
                FieldMeta::scalar("Tags").with_shape(&shape::HASH_MAP)
            ];
            &FIELDS
        }
    }

    struct Empty;

    impl TableModel for Empty {
        fn model_name() -> &'static str {
            "Empty"
        }

        fn table() -> TableRef {
            TableRef::with_default_schema("Empty")
        }

        fn fields() -> &'static [FieldMeta] {
            &[]
        }
    }

    #[test]
    fn insert_emits_all_columns_in_order() {
        assert_eq!(
            insert::<Order>(&[]),
            "insert into [dbo].[Order] ([Id],[CustomerName],[CreatTime]) \
             VALUES (@Id,@CustomerName,@CreatTime)"
        );
    }

    #[test]
    fn insert_placeholder_count_matches_column_count() {
        let stmt = insert::<Order>(&[]);
        assert_eq!(stmt.matches('[').count(), 3 + 2); // 3 columns + schema/table
        assert_eq!(stmt.matches('@').count(), 3);
    }

    #[test]
    fn insert_exclusion_is_case_insensitive() {
        let lower = insert::<Order>(&["customername"]);
        let upper = insert::<Order>(&["CUSTOMERNAME"]);
        assert_eq!(lower, upper);
        assert_eq!(
            lower,
            "insert into [dbo].[Order] ([Id],[CreatTime]) VALUES (@Id,@CreatTime)"
        );
    }

    #[test]
    fn insert_unmatched_exclusion_is_a_noop() {
        assert_eq!(insert::<Order>(&["NoSuchField"]), insert::<Order>(&[]));
    }

    #[test]
    fn insert_skips_container_fields() {
        assert_eq!(
            insert::<Shipment>(&[]),
            "insert into [logistics].[Shipments] ([Id]) VALUES (@Id)"
        );
    }

    #[test]
    fn insert_on_empty_model_degrades_gracefully() {
        assert_eq!(insert::<Empty>(&[]), "insert into [dbo].[Empty] () VALUES ()");
    }

    #[test]
    fn update_assigns_every_included_column() {
        assert_eq!(
            update::<Order>("AND Id=@Id", &["Id"]),
            "UPDATE [dbo].[Order] SET [CustomerName]=@CustomerName,\
             [CreatTime]=@CreatTime where 1=1 AND Id=@Id"
        );
    }

    #[test]
    fn update_keeps_structural_where_with_empty_fragment() {
        let stmt = update::<Order>("", &[]);
        assert!(stmt.contains("where 1=1"));
        assert!(stmt.ends_with("where 1=1"));
    }

    #[test]
    fn update_partial_uses_caller_fields() {
        assert_eq!(
            update_partial::<Order>(&["CustomerName"], "AND Id=@Id"),
            "UPDATE [dbo].[Order] SET [CustomerName]=@CustomerName where 1=1 AND Id=@Id"
        );
    }

    #[test]
    fn update_partial_contains_structural_where() {
        assert!(update_partial::<Order>(&["CustomerName"], "").contains("where 1=1"));
    }

    #[test]
    fn soft_delete_is_an_update() {
        let stmt = delete::<Order>("AND Id=@Id", DeleteMode::Soft);
        assert_eq!(
            stmt,
            "UPDATE [dbo].[Order] SET isDeleted=true where 1=1 AND Id=@Id"
        );
        assert!(!stmt.contains("DELETE FROM"));
    }

    #[test]
    fn physical_delete_removes_the_row() {
        let stmt = delete::<Order>("AND Id=@Id", DeleteMode::Physical);
        assert_eq!(stmt, "DELETE FROM [dbo].[Order] where 1=1 AND Id=@Id");
        assert!(!stmt.contains("isDeleted"));
    }

    #[test]
    fn delete_defaults_to_soft() {
        assert_eq!(DeleteMode::default(), DeleteMode::Soft);
    }

    #[test]
    fn query_one_uses_arbitrary_key_field() {
        assert_eq!(
            query_one::<Order>("CustomerName", &[]),
            "Select [Id],[CustomerName],[CreatTime] From [dbo].[Order] \
             Where CustomerName=@CustomerName"
        );
    }

    #[test]
    fn query_count_with_fragment_keeps_where() {
        assert_eq!(
            query_count::<Order>(Some("AND Status=@Status")),
            "Select Count(*) From [dbo].[Order] Where 1=1 AND Status=@Status"
        );
    }

    #[test]
    fn query_count_with_empty_fragment_still_has_where() {
        assert_eq!(
            query_count::<Order>(Some("")),
            "Select Count(*) From [dbo].[Order] Where 1=1"
        );
    }

    #[test]
    fn query_count_without_filter_omits_where() {
        let stmt = query_count::<Order>(None);
        assert_eq!(stmt, "Select Count(*) From [dbo].[Order]");
        assert!(!stmt.contains("Where"));
    }

    #[test]
    fn query_all_wraps_row_number_window() {
        let stmt = query_all::<Order>(&QueryOptions::default());
        assert_eq!(
            stmt,
            "SELECT * FROM (SELECT ROW_NUMBER() OVER (ORDER BY a.CreatTime DESC) \
             AS RN,Id,CustomerName,CreatTime FROM [dbo].[Order] a) t"
        );
    }

    #[test]
    fn query_all_with_filter_and_sort() {
        let opts = QueryOptions {
            where_fragment: "AND Status=@Status",
            sort_field: "Id",
            sort: SortDirection::Asc,
            exclude: &["CreatTime"]
        };
        assert_eq!(
            query_all::<Order>(&opts),
            "SELECT * FROM (SELECT ROW_NUMBER() OVER (ORDER BY a.Id ASC) \
             AS RN,Id,CustomerName FROM [dbo].[Order] a where 1=1 AND Status=@Status) t"
        );
    }

    #[test]
    fn first_page_starts_at_row_one() {
        assert_eq!(Page::new(1, 20).bounds(), (1, 20));
    }

    #[test]
    fn second_page_bounds_match_legacy_arithmetic() {
        assert_eq!(Page::new(2, 20).bounds(), (41, 60));
        assert_eq!(Page::new(3, 10).bounds(), (31, 40));
    }

    #[test]
    fn page_defaults() {
        assert_eq!(Page::default(), Page::new(1, 20));
    }

    #[test]
    fn query_page_bounds_in_statement() {
        let stmt = query_page::<Order>(&QueryOptions::default(), Page::new(2, 20));
        assert!(stmt.ends_with("t WHERE t.RN BETWEEN 41 AND 60"));
    }

    #[test]
    fn query_page_without_exclusions_projects_star() {
        let stmt = query_page::<Order>(&QueryOptions::default(), Page::default());
        assert_eq!(
            stmt,
            "SELECT * FROM (SELECT ROW_NUMBER() OVER (ORDER BY a.CreatTime DESC) \
             AS RN,* FROM [dbo].[Order] a) t WHERE t.RN BETWEEN 1 AND 20"
        );
    }

    #[test]
    fn query_page_with_exclusions_projects_columns() {
        let opts = QueryOptions {
            exclude: &["creattime"],
            ..QueryOptions::default()
        };
        let stmt = query_page::<Order>(&opts, Page::default());
        assert!(stmt.contains("AS RN,Id,CustomerName FROM"));
        assert!(!stmt.contains("CreatTime FROM"));
    }

    #[test]
    fn excluding_same_name_twice_is_idempotent() {
        assert_eq!(
            update::<Order>("", &["Id", "ID"]),
            update::<Order>("", &["Id"])
        );
    }

    #[test]
    fn sort_direction_sql() {
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
        assert_eq!(SortDirection::default(), SortDirection::Desc);
    }
}
