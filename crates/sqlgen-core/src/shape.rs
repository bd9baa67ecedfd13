// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structural type descriptions and the generalized assignability test.
//!
//! The statement builders need to know which fields are scalar column
//! candidates and which are container-shaped (a `Vec<Line>` field is not a
//! column). Rather than hard-coding a type list in the builders, every
//! field carries a [`TypeShape`] — a small static description of its type —
//! and classification is a structural compatibility question:
//!
//! - [`is_list_shaped`] — generic and assignable to the open [`SEQUENCE`]
//!   anchor
//! - [`is_map_shaped`] — generic and assignable to the open [`MAPPING`]
//!   anchor
//!
//! [`is_assignable`] is the general relation: identity, base-chain
//! subtyping, and trait-set membership, with closed generics compared to
//! open targets through their generic origin (so `Vec<i32>` matches the
//! open `Vec` form regardless of the element type).
//!
//! # Example
//!
//! ```rust
//! use sqlgen_core::shape::{self, TypeShape};
//!
//! static LINES: TypeShape = TypeShape::closed("Vec<Line>", &shape::VEC);
//!
//! assert!(shape::is_list_shaped(&LINES));
//! assert!(!shape::is_map_shaped(&LINES));
//! ```

/// Static structural description of a type.
///
/// Shapes are compared by qualified [`name`](TypeShape::name); two shapes
/// with the same name describe the same type. The derive macro emits one
/// shape per field; manual implementations can build them with the `const`
/// constructors or use [`OPAQUE`] when classification does not matter.
#[derive(Debug)]
pub struct TypeShape {
    /// Qualified type name, e.g. `"alloc::vec::Vec"` or `"Vec<i32>"`.
    pub name: &'static str,

    /// Whether this is an open generic form (type parameters unbound).
    pub open: bool,

    /// For a closed generic, the open form it instantiates.
    pub origin: Option<&'static TypeShape>,

    /// Trait shapes this shape implements.
    pub implements: &'static [&'static TypeShape],

    /// Supertype, when the described type has one.
    pub base: Option<&'static TypeShape>
}

impl TypeShape {
    /// A plain non-generic type with no declared traits or base.
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            open: false,
            origin: None,
            implements: &[],
            base: None
        }
    }

    /// A non-generic type that implements the given trait shapes.
    pub const fn concrete(
        name: &'static str,
        implements: &'static [&'static TypeShape]
    ) -> Self {
        Self {
            name,
            open: false,
            origin: None,
            implements,
            base: None
        }
    }

    /// An open generic form (`Vec<T>` with `T` unbound).
    pub const fn open_generic(
        name: &'static str,
        implements: &'static [&'static TypeShape]
    ) -> Self {
        Self {
            name,
            open: true,
            origin: None,
            implements,
            base: None
        }
    }

    /// A closed generic (`Vec<i32>`) pointing at its open form.
    pub const fn closed(name: &'static str, origin: &'static TypeShape) -> Self {
        Self {
            name,
            open: false,
            origin: Some(origin),
            implements: &[],
            base: None
        }
    }

    /// A non-generic subtype of `base`.
    pub const fn derived(name: &'static str, base: &'static TypeShape) -> Self {
        Self {
            name,
            open: false,
            origin: None,
            implements: &[],
            base: Some(base)
        }
    }

    /// Whether this shape is generic at all — open, or a closed
    /// instantiation of an open form.
    pub const fn is_generic(&self) -> bool {
        self.open || self.origin.is_some()
    }
}

/// Open anchor matched by every sequence container shape.
pub const SEQUENCE: TypeShape = TypeShape::open_generic("sqlgen::Sequence", &[]);

/// Open anchor matched by every map container shape.
pub const MAPPING: TypeShape = TypeShape::open_generic("sqlgen::Mapping", &[]);

/// Open form of `Vec<T>`.
pub const VEC: TypeShape = TypeShape::open_generic("alloc::vec::Vec", &[&SEQUENCE]);

/// Open form of `VecDeque<T>`.
pub const VEC_DEQUE: TypeShape =
    TypeShape::open_generic("alloc::collections::VecDeque", &[&SEQUENCE]);

/// Open form of `LinkedList<T>`.
pub const LINKED_LIST: TypeShape =
    TypeShape::open_generic("alloc::collections::LinkedList", &[&SEQUENCE]);

/// Open form of `HashMap<K, V>`.
pub const HASH_MAP: TypeShape =
    TypeShape::open_generic("std::collections::HashMap", &[&MAPPING]);

/// Open form of `BTreeMap<K, V>`.
pub const BTREE_MAP: TypeShape =
    TypeShape::open_generic("alloc::collections::BTreeMap", &[&MAPPING]);

/// Placeholder shape for fields whose type never needs classification.
///
/// Always scalar: not list-shaped, not map-shaped. Useful for manual
/// [`TableModel`](crate::TableModel) implementations.
pub const OPAQUE: TypeShape = TypeShape::scalar("sqlgen::Opaque");

/// Whether `target` matches `probe` as an interface entry.
///
/// An open target also matches through the probe's generic origin, so a
/// closed `Sequence<i32>` entry satisfies the open `Sequence` target.
fn interface_matches(probe: &TypeShape, target: &TypeShape) -> bool {
    if target.open
        && let Some(origin) = probe.origin
    {
        return origin.name == target.name;
    }
    probe.name == target.name
}

/// Transitive search of the implements set, the generic origin, and the
/// base chain.
fn implements_target(shape: &TypeShape, target: &TypeShape) -> bool {
    if shape
        .implements
        .iter()
        .any(|i| interface_matches(i, target) || implements_target(i, target))
    {
        return true;
    }
    if let Some(origin) = shape.origin
        && implements_target(origin, target)
    {
        return true;
    }
    if let Some(base) = shape.base
        && implements_target(base, target)
    {
        return true;
    }
    false
}

/// Generalized compatibility test: can a value described by `candidate` be
/// treated as `target`?
///
/// True when the shapes are identical, when `target` appears in the
/// candidate's base chain, or when `target` is in the candidate's
/// transitive trait set. A closed generic candidate tested against an open
/// target is first rewritten to its generic origin, so any `Vec<T>`
/// matches the open `Vec` form.
///
/// The relation is reflexive for every shape.
pub fn is_assignable(candidate: &TypeShape, target: &TypeShape) -> bool {
    let mut cand = candidate;
    if target.open
        && cand.is_generic()
        && !cand.open
        && let Some(origin) = cand.origin
    {
        cand = origin;
    }

    if cand.name == target.name {
        return true;
    }

    let mut base = cand.base;
    while let Some(b) = base {
        if b.name == target.name {
            return true;
        }
        base = b.base;
    }

    implements_target(cand, target)
}

/// Whether a shape is a generic sequence container.
///
/// A non-generic collection does not qualify, matching the rule that only
/// parameterized container shapes are excluded from column candidates.
pub fn is_list_shaped(shape: &TypeShape) -> bool {
    shape.is_generic() && is_assignable(shape, &SEQUENCE)
}

/// Whether a shape is a generic map container.
pub fn is_map_shaped(shape: &TypeShape) -> bool {
    shape.is_generic() && is_assignable(shape, &MAPPING)
}
