//! Wire field naming conventions.
//!
//! The resolver maps a `(descriptor, context)` pair to the canonical flat
//! field name used on the wire, and [`parse`] is its exact inverse. The
//! naming protocol is purely string-based for wire compatibility, but it is
//! isolated here so the rest of the crate reasons in `(descriptor, context)`
//! pairs, never in raw strings.
//!
//! Conventions:
//!
//! - Reserved keys ([`ID`], [`TYPE`], [`SCORE`], [`DISTANCE`]) are never
//!   schema fields.
//! - Internal (non-user-facing) fields carry the [`INTERNAL_FIELD_PREFIX`]
//!   marker.
//! - A context-scoped value is stored under `context` + `_` + base name;
//!   context matching on the way back requires the prefix at position 0, so
//!   a base name that merely embeds the context string is never mistaken for
//!   a contextualized one.
//!
//! The scheme is collision-free as long as no base field name itself starts
//! with an active context followed by the separator: a field literally named
//! `es_title` shares its wire name with field `title` under context `es`,
//! and deserializing with that context attributes the value to `title`.
//! Schemas must choose field names that do not start with a context string
//! they are queried with.

use crate::schema::field::FieldDescriptor;

/// Reserved wire key for the document identifier.
pub const ID: &str = "_id_";
/// Reserved wire key for the document type.
pub const TYPE: &str = "_type_";
/// Reserved wire key for the search score.
pub const SCORE: &str = "score";
/// Reserved wire key for the geo distance.
pub const DISTANCE: &str = "_distance_";

/// Marker prefix carried by internal (non-user-facing) fields.
pub const INTERNAL_FIELD_PREFIX: &str = "_internal_";

/// Separator between a context and the base field name.
pub const CONTEXT_SEPARATOR: char = '_';

/// Check whether a wire key is one of the four reserved keys.
pub fn is_reserved(name: &str) -> bool {
    name == ID || name == TYPE || name == SCORE || name == DISTANCE
}

/// Resolve the canonical wire field name of a `(descriptor, context)` pair.
///
/// Returns `None` only when the descriptor cannot be named (empty base
/// name); callers must then skip the value.
pub fn resolve(descriptor: &FieldDescriptor, context: Option<&str>) -> Option<String> {
    let base = descriptor.name();
    if base.is_empty() {
        return None;
    }

    let contextualized = match context {
        Some(context) if !context.is_empty() => {
            format!("{context}{CONTEXT_SEPARATOR}{base}")
        }
        _ => base.to_string(),
    };

    if descriptor.is_internal() {
        Some(format!("{INTERNAL_FIELD_PREFIX}{contextualized}"))
    } else {
        Some(contextualized)
    }
}

/// The outcome of parsing a wire field name back to a schema name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedName<'a> {
    /// The raw schema field name, with marker and context prefixes removed.
    pub base: &'a str,
    /// Whether the supplied context's prefix was present and stripped.
    pub contextualized: bool,
}

/// Parse a wire field name, stripping the internal marker and, when a
/// context is supplied, its prefix. Exact inverse of [`resolve`].
pub fn parse<'a>(wire_name: &'a str, context: Option<&str>) -> ParsedName<'a> {
    let stripped = wire_name
        .strip_prefix(INTERNAL_FIELD_PREFIX)
        .unwrap_or(wire_name);

    if let Some(context) = context
        && !context.is_empty()
    {
        let prefix = format!("{context}{CONTEXT_SEPARATOR}");
        if let Some(base) = stripped.strip_prefix(&prefix) {
            return ParsedName {
                base,
                contextualized: true,
            };
        }
    }

    ParsedName {
        base: stripped,
        contextualized: false,
    }
}
