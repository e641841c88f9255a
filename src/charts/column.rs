//! Vertical bar charts, standalone and grouped.

use crate::charts::width::ColumnWidth;
use crate::datapoint::{BoxedDataPoint, ShoppingList};
use crate::document::{values_to_document, Document, Fragment};
use crate::error::PopulateError;

/// A basic vertical bar chart over an ordered list of datapoints.
pub struct ColumnChart<C> {
    name: String,
    identifier: String,
    width: ColumnWidth,
    columns: Vec<BoxedDataPoint<C>>,
}

impl<C> ColumnChart<C> {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        width: ColumnWidth,
        columns: Vec<BoxedDataPoint<C>>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            width,
            columns,
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
        self.columns.iter().flat_map(|c| c.shopping_list()).collect()
    }

    /// Populates the per-column values only, skipping the `name` and
    /// `chart_type` metadata. This is what a grouping parent embeds, so
    /// nesting does not duplicate the wrapper.
    pub fn sub_populate(&self, ctx: &C) -> Result<Document, PopulateError> {
        let mut doc = Document::new();
        for column in &self.columns {
            let values = column.evaluate(ctx)?;
            doc.insert(
                column.name().to_string(),
                Fragment::Map(values_to_document(values)),
            );
        }
        Ok(doc)
    }

    pub fn populate(&self, ctx: &C) -> Result<Document, PopulateError> {
        let mut doc = self.sub_populate(ctx)?;
        doc.insert("name".to_string(), Fragment::Text(self.name.clone()));
        doc.insert("chart_type".to_string(), Fragment::Text("column".to_string()));
        Ok(doc)
    }
}

/// Column charts grouped side by side under one heading.
pub struct GroupedColumnChart<C> {
    name: String,
    identifier: String,
    width: ColumnWidth,
    charts: Vec<ColumnChart<C>>,
}

impl<C> GroupedColumnChart<C> {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        width: ColumnWidth,
        charts: Vec<ColumnChart<C>>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            width,
            charts,
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
        self.charts.iter().flat_map(|c| c.shopping_list()).collect()
    }

    pub fn populate(&self, ctx: &C) -> Result<Document, PopulateError> {
        let mut doc = Document::new();
        for chart in &self.charts {
            doc.insert(
                chart.name().to_string(),
                Fragment::Map(chart.sub_populate(ctx)?),
            );
        }
        doc.insert("name".to_string(), Fragment::Text(self.name.clone()));
        doc.insert(
            "chart_type".to_string(),
            Fragment::Text("grouped_column".to_string()),
        );
        Ok(doc)
    }
}
