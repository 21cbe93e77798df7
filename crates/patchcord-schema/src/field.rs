//! Field descriptors for record shapes.
//!
//! Every decodable shape is an enumerated list of `(name, kind)` pairs; the
//! decoder matches on [`FieldKind`] instead of inspecting runtime types.

use crate::shapes::ShapeId;

/// The declared type of one field in a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer primitive.
    Int,
    /// String primitive.
    Str,
    /// Boolean primitive.
    Bool,
    /// Floating-point primitive.
    Float,
    /// A nested record shape, decoded recursively.
    Shape(ShapeId),
    /// A homogeneous ordered sequence of the element kind.
    List(&'static FieldKind),
    /// A homogeneous mapping from primitive keys to the value kind.
    Map(&'static FieldKind),
    /// The enclosing shape itself, resolved at decode time against the
    /// shape currently being decoded.
    SelfRef,
    /// A union of scalar types or an otherwise loosely-typed value; passed
    /// through untouched with no recursive decoding.
    Union,
}

/// Value assigned to a field absent from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Absent fields are left null.
    Null,
    /// Absent fields take an explicit boolean default.
    Bool(bool),
}

/// One declared field of a record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Payload key.
    pub name: &'static str,
    /// Declared type.
    pub kind: FieldKind,
    /// Default applied when the key is absent.
    pub default: FieldDefault,
}

impl Field {
    /// Declare a field whose absence leaves it null.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: FieldDefault::Null,
        }
    }

    /// Declare a field with an explicit non-null default.
    #[must_use]
    pub const fn with_default(name: &'static str, kind: FieldKind, default: FieldDefault) -> Self {
        Self {
            name,
            kind,
            default,
        }
    }
}
