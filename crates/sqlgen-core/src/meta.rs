// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table and field metadata: the type descriptor resolver.
//!
//! A data-model type describes itself through [`TableModel`]: its table
//! identity ([`TableRef`]) and an ordered, declaration-order field registry
//! (`&'static [FieldMeta]`). The derive macro compiles attribute metadata
//! into this registry once, at compile time; manual implementations build
//! the same statics by hand.
//!
//! Absence of metadata is always a valid case: a model without a declared
//! mapping resolves to the default schema and its own type name, a field
//! without a label or description resolves to an empty string.

use crate::{MetaError, shape};

/// Schema used when a model declares no mapping, or declares one without a
/// schema.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// Default sort column for windowed queries.
///
/// The spelling is inherited from the existing consumers' schemas and is
/// kept verbatim for output compatibility.
pub const DEFAULT_SORT_FIELD: &str = "CreatTime";

/// Resolved table identity: schema plus table name.
///
/// # Example
///
/// ```rust
/// use sqlgen_core::TableRef;
///
/// let table = TableRef::new("sales", "Order");
/// assert_eq!(table.qualified(), "[sales].[Order]");
///
/// let fallback = TableRef::with_default_schema("Order");
/// assert_eq!(fallback.qualified(), "[dbo].[Order]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRef {
    /// Schema name (e.g. `"dbo"`, `"sales"`).
    pub schema: &'static str,

    /// Table name.
    pub name: &'static str
}

impl TableRef {
    /// Create a table reference with an explicit schema.
    pub const fn new(schema: &'static str, name: &'static str) -> Self {
        Self {
            schema,
            name
        }
    }

    /// Create a table reference in the default schema.
    pub const fn with_default_schema(name: &'static str) -> Self {
        Self {
            schema: DEFAULT_SCHEMA,
            name
        }
    }

    /// Render the bracket-quoted qualified name, `[schema].[name]`.
    pub fn qualified(&self) -> String {
        format!("[{}].[{}]", self.schema, self.name)
    }
}

/// Resolved identity and labels for one persisted field.
///
/// Built by the derive macro (one entry per non-skipped struct field, in
/// declaration order) or written by hand for manual implementations.
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
    /// Declared field name, used by selector lookups.
    pub name: &'static str,

    /// Column identifier emitted into SQL. Defaults to the field name,
    /// overridable via the naming attribute.
    pub column: &'static str,

    /// Human-readable display label, when declared.
    pub label: Option<&'static str>,

    /// Description, when declared.
    pub description: Option<&'static str>,

    /// Structural shape of the field's type, used to classify container
    /// fields out of the column list.
    pub shape: &'static shape::TypeShape
}

impl FieldMeta {
    /// A scalar field whose column name equals its field name.
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            column: name,
            label: None,
            description: None,
            shape: &shape::OPAQUE
        }
    }

    /// Attach a display label.
    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Attach a description.
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Override the emitted column name.
    pub const fn with_column(mut self, column: &'static str) -> Self {
        self.column = column;
        self
    }

    /// Replace the structural shape.
    pub const fn with_shape(mut self, shape: &'static shape::TypeShape) -> Self {
        self.shape = shape;
        self
    }

    /// Display label, or an empty string when none was declared.
    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or("")
    }

    /// Description, or an empty string when none was declared.
    pub fn description_text(&self) -> &'static str {
        self.description.unwrap_or("")
    }

    /// Whether this field is a scalar column candidate.
    ///
    /// Generic list- and map-shaped fields are containers, not columns.
    pub fn is_column(&self) -> bool {
        !shape::is_list_shaped(self.shape) && !shape::is_map_shaped(self.shape)
    }
}

/// Type descriptor for a data-model type.
///
/// Implemented by `#[derive(TableModel)]` or by hand. All metadata is
/// `'static`, so every resolution is a pure read: same type, same answer,
/// safely callable from any thread.
///
/// # Example
///
/// ```rust
/// use sqlgen_core::{FieldMeta, TableModel, TableRef};
///
/// struct Order;
///
/// impl TableModel for Order {
///     fn model_name() -> &'static str {
///         "Order"
///     }
///
///     fn table() -> TableRef {
///         TableRef::with_default_schema("Order")
///     }
///
///     fn fields() -> &'static [FieldMeta] {
///         static FIELDS: [FieldMeta; 2] = [
///             FieldMeta::scalar("Id"),
///             FieldMeta::scalar("CreatTime").with_label("Created")
///         ];
///         &FIELDS
///     }
/// }
///
/// assert_eq!(Order::display_label("CreatTime").unwrap(), "Created");
/// assert_eq!(Order::display_label("Id").unwrap(), "");
/// ```
pub trait TableModel {
    /// The model's own type name, used in error messages and as the table
    /// name fallback.
    fn model_name() -> &'static str;

    /// Declared table mapping, or the default-schema/type-name fallback.
    ///
    /// Never fails: absence of a mapping is a common, valid case.
    fn table() -> TableRef;

    /// All fields in declaration order.
    ///
    /// The order is stable across calls by construction (static data) and
    /// determines column order in generated statements.
    fn fields() -> &'static [FieldMeta];

    /// Fields that are scalar column candidates, in declaration order.
    fn columns() -> Vec<&'static FieldMeta> {
        Self::fields().iter().filter(|f| f.is_column()).collect()
    }

    /// Look up a field by its declared name.
    ///
    /// The match is exact: selectors are code, not data, so a miss is a
    /// caller programming error surfaced as
    /// [`MetaError::InvalidFieldSelector`].
    fn field(name: &str) -> Result<&'static FieldMeta, MetaError> {
        Self::fields().iter().find(|f| f.name == name).ok_or_else(|| {
            MetaError::InvalidFieldSelector {
                model:    Self::model_name(),
                selector: name.to_string()
            }
        })
    }

    /// Display label for a field, empty string when none was declared.
    ///
    /// # Errors
    ///
    /// [`MetaError::InvalidFieldSelector`] for an unknown field name.
    fn display_label(name: &str) -> Result<&'static str, MetaError> {
        Ok(Self::field(name)?.display_label())
    }

    /// Description for a field, empty string when none was declared.
    ///
    /// # Errors
    ///
    /// [`MetaError::InvalidFieldSelector`] for an unknown field name.
    fn description(name: &str) -> Result<&'static str, MetaError> {
        Ok(Self::field(name)?.description_text())
    }

    /// Display label for a field, failing when none was declared.
    ///
    /// # Errors
    ///
    /// [`MetaError::InvalidFieldSelector`] for an unknown field name,
    /// [`MetaError::MissingAttribute`] when the field has no label.
    fn display_label_required(name: &str) -> Result<&'static str, MetaError> {
        let field = Self::field(name)?;
        field.label.ok_or(MetaError::MissingAttribute {
            model:     Self::model_name(),
            attribute: "label",
            field:     field.name
        })
    }

    /// Description for a field, failing when none was declared.
    ///
    /// # Errors
    ///
    /// [`MetaError::InvalidFieldSelector`] for an unknown field name,
    /// [`MetaError::MissingAttribute`] when the field has no description.
    fn description_required(name: &str) -> Result<&'static str, MetaError> {
        let field = Self::field(name)?;
        field.description.ok_or(MetaError::MissingAttribute {
            model:     Self::model_name(),
            attribute: "description",
            field:     field.name
        })
    }
}
