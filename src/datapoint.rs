//! The main capability of the system: the `DataPoint`.
//!
//! A datapoint is the atomic leaf of a profile tree. It declares what
//! external data it needs up front (the shopping list) and computes its
//! displayed values given a per-request context.

use std::collections::{BTreeMap, HashSet};

use crate::error::PopulateError;
use crate::value::Value;

/// The set of external data keys a (sub)tree needs before it can populate.
pub type ShoppingList = HashSet<String>;

/// Named values produced by one evaluation.
pub type ValueSet = BTreeMap<String, Value>;

/// The atomic leaf contract.
///
/// `C` is the caller-defined context type threaded unchanged through the
/// whole tree: a lookup key, a full request object, whatever the datapoints
/// of a given tree agree on. Implementations document which parts of it they
/// read.
pub trait DataPoint<C> {
    /// The output key this datapoint's result is filed under by its chart.
    fn name(&self) -> &str;

    /// Declares the external keys `evaluate` will expect to find resolved.
    ///
    /// Self-contained datapoints need no upfront declaration, so the default
    /// is an empty set rather than an absent method.
    fn shopping_list(&self) -> ShoppingList {
        ShoppingList::new()
    }

    /// Computes the named output values for one request.
    ///
    /// A dependency key missing from the external source surfaces as
    /// [`PopulateError::Lookup`]; the datapoint does not suppress it.
    fn evaluate(&self, ctx: &C) -> Result<ValueSet, PopulateError>;
}

/// A tree-owned datapoint. `Send + Sync` so a finished tree can serve
/// concurrent populate passes.
pub type BoxedDataPoint<C> = Box<dyn DataPoint<C> + Send + Sync>;
