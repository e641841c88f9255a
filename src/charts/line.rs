//! A line chart over an ordered series of datapoints.

use crate::charts::width::ColumnWidth;
use crate::datapoint::{BoxedDataPoint, ShoppingList};
use crate::document::{values_to_document, Document, Fragment};
use crate::error::PopulateError;

pub struct LineChart<C> {
    name: String,
    identifier: String,
    width: ColumnWidth,
    points: Vec<BoxedDataPoint<C>>,
}

impl<C> LineChart<C> {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        width: ColumnWidth,
        points: Vec<BoxedDataPoint<C>>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            width,
            points,
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
        self.points.iter().flat_map(|p| p.shopping_list()).collect()
    }

    pub fn populate(&self, ctx: &C) -> Result<Document, PopulateError> {
        let mut doc = Document::new();
        for point in &self.points {
            let values = point.evaluate(ctx)?;
            doc.insert(
                point.name().to_string(),
                Fragment::Map(values_to_document(values)),
            );
        }
        doc.insert("name".to_string(), Fragment::Text(self.name.clone()));
        doc.insert("chart_type".to_string(), Fragment::Text("line".to_string()));
        Ok(doc)
    }
}
