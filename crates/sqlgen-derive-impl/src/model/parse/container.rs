// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container classification of field types.
//!
//! The statement builders only emit scalar fields as columns, so each
//! field's type is classified once at derive time: generic sequence
//! containers, generic map containers, or scalar (everything else).
//!
//! Classification is syntactic over the last path segment, the same
//! heuristic used for `Option` detection: it may misfire on a custom type
//! named `Vec`. Sets are deliberately scalar — only list- and map-shaped
//! containers are excluded from columns.

use syn::{GenericArgument, PathArguments, Type};

/// Structural category of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// Ordinary column candidate.
    Scalar,

    /// Generic sequence container (`Vec`, `VecDeque`, `LinkedList`).
    List,

    /// Generic map container (`HashMap`, `BTreeMap`).
    Map
}

impl Container {
    /// Classify a field type.
    ///
    /// `Option` wrappers are transparent: `Option<Vec<T>>` classifies as a
    /// list, `Option<String>` as a scalar.
    pub fn classify(ty: &Type) -> Self {
        match Self::anchor(ty) {
            Some("VEC" | "VEC_DEQUE" | "LINKED_LIST") => Self::List,
            Some("HASH_MAP" | "BTREE_MAP") => Self::Map,
            _ => Self::Scalar
        }
    }

    /// Name of the matching open-shape anchor in `sqlgen_core::shape`,
    /// `None` for scalars.
    pub fn anchor(ty: &Type) -> Option<&'static str> {
        let (segment, inner) = segment_parts(ty)?;
        if segment.ident == "Option" {
            return Self::anchor(inner?);
        }
        // only parameterized containers qualify
        inner?;
        if segment.ident == "Vec" {
            Some("VEC")
        } else if segment.ident == "VecDeque" {
            Some("VEC_DEQUE")
        } else if segment.ident == "LinkedList" {
            Some("LINKED_LIST")
        } else if segment.ident == "HashMap" {
            Some("HASH_MAP")
        } else if segment.ident == "BTreeMap" {
            Some("BTREE_MAP")
        } else {
            None
        }
    }
}

/// Last path segment plus its first generic type argument.
fn segment_parts(ty: &Type) -> Option<(&syn::PathSegment, Option<&Type>)> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    let inner = match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| {
            if let GenericArgument::Type(inner) = arg {
                Some(inner)
            } else {
                None
            }
        }),
        _ => None
    };
    Some((segment, inner))
}
