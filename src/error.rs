//! Defines the error types for the two phases of a profile tree's life:
//! construction (configuration errors) and population (evaluation errors).

use thiserror::Error;

/// Structural misuse detected while building the tree.
///
// This enum allows for programmatic inspection of errors, which is more
// robust than string matching on the error message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A row's chart children claim more horizontal space than one row holds.
    #[error("row '{name}' is over-full: child widths sum to {total:.3}, exceeding 1.0 by {excess:.3}")]
    RowOverflow {
        name: String,
        total: f64,
        excess: f64,
    },
    /// An embellishment key shadows a structural output key (`name`, `children`).
    #[error("embellishment key '{key}' on node '{node}' collides with a structural key")]
    ReservedKey { node: String, key: String },
    /// Two embellishments on the same node declare the same key.
    #[error("embellishment key '{key}' is declared more than once on node '{node}'")]
    DuplicateKey { node: String, key: String },
}

/// A failure raised during a population pass.
///
/// The tree performs no local recovery: every variant propagates unmodified
/// from the datapoint or node that raised it to the caller of the top-level
/// `populate`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PopulateError {
    /// A dependency key had no corresponding value in the external source.
    #[error("no value for key '{key}' in the data source")]
    Lookup { key: String },
    /// An extension point was called before anyone implemented it.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
    /// A computed embellishment produced a key that collides with a
    /// structural key or another entry on the same node. Static keys are
    /// caught at construction; computed keys can only be known here.
    #[error("embellishment key '{key}' on node '{node}' collides with an existing output key")]
    KeyCollision { node: String, key: String },
}

impl PopulateError {
    /// Convenience constructor for the common missing-key case.
    pub fn lookup(key: impl Into<String>) -> Self {
        PopulateError::Lookup { key: key.into() }
    }
}
