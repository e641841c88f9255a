//! A single highlighted statistic.

use crate::charts::width::ColumnWidth;
use crate::datapoint::{BoxedDataPoint, ShoppingList};
use crate::document::{values_to_document, Document, Fragment};
use crate::error::PopulateError;

/// One datapoint shown on its own, without the chart metadata wrapper.
pub struct StatList<C> {
    name: String,
    identifier: String,
    width: ColumnWidth,
    stat: BoxedDataPoint<C>,
}

impl<C> StatList<C> {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        width: ColumnWidth,
        stat: BoxedDataPoint<C>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            width,
            stat,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn width(&self) -> ColumnWidth {
        self.width
    }

    pub fn shopping_list(&self) -> ShoppingList {
        self.stat.shopping_list()
    }

    pub fn populate(&self, ctx: &C) -> Result<Document, PopulateError> {
        let values = self.stat.evaluate(ctx)?;
        Ok(Document::from([(
            "stat".to_string(),
            Fragment::Map(values_to_document(values)),
        )]))
    }
}
