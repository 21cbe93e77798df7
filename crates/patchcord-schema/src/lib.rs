//! Schema tables and the generic payload decoder.
//!
//! Payload structures are described by `const` field tables rather than one
//! struct per shape. The decoder walks a table against raw JSON, dropping
//! unknown keys, defaulting absent ones, and recursing into nested shapes,
//! so new payload fields upstream never break parsing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decode;
pub mod event;
pub mod field;
pub mod registry;
pub mod shapes;

pub use decode::{decode, DecodeError, DecodedValue, Record};
pub use event::{decode_frame, Event, EventPayload};
pub use field::{Field, FieldDefault, FieldKind};
pub use registry::{registry, SchemaRegistry};
pub use shapes::ShapeId;
