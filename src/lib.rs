//! smartcharts: a declarative tree-composition library for profile reports.
//!
//! A caller builds a static tree of profile nodes, charts, and datapoints at
//! configuration time. Per request, the tree's dependency-collection pass
//! (`shopping_list`) says which external keys to pre-fetch, and its population
//! pass (`populate`) turns the resolved context into one nested, serializable
//! document mirroring the tree shape. The tree itself fetches nothing and
//! holds no per-request state.

pub mod charts;
pub mod datapoint;
pub mod document;
pub mod embellish;
pub mod error;
pub mod profile;
pub mod value;

// Re-export key types for convenient access
pub use charts::{
    Chart, ColumnChart, ColumnWidth, DoughnutChart, GroupedColumnChart, LineChart, StatList,
};
pub use datapoint::{BoxedDataPoint, DataPoint, ShoppingList, ValueSet};
pub use document::{Document, Fragment};
pub use embellish::Embellishment;
pub use error::{ConfigError, PopulateError};
pub use profile::{Child, NodeRole, ProfileNode};
pub use value::{Numeric, Percent, Value};
