//! A pie chart with a hole in the middle.

use crate::charts::width::ColumnWidth;
use crate::datapoint::{BoxedDataPoint, ShoppingList};
use crate::document::{values_to_document, Document, Fragment};
use crate::error::PopulateError;

pub struct DoughnutChart<C> {
    name: String,
    identifier: String,
    width: ColumnWidth,
    slices: Vec<BoxedDataPoint<C>>,
}

impl<C> DoughnutChart<C> {
    pub fn new(
        name: impl Into<String>,
        identifier: impl Into<String>,
        width: ColumnWidth,
        slices: Vec<BoxedDataPoint<C>>,
    ) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            width,
            slices,
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
        self.slices.iter().flat_map(|s| s.shopping_list()).collect()
    }

    pub fn populate(&self, ctx: &C) -> Result<Document, PopulateError> {
        let mut doc = Document::new();
        for slice in &self.slices {
            let values = slice.evaluate(ctx)?;
            doc.insert(
                slice.name().to_string(),
                Fragment::Map(values_to_document(values)),
            );
        }
        doc.insert("name".to_string(), Fragment::Text(self.name.clone()));
        doc.insert("chart_type".to_string(), Fragment::Text("pie".to_string()));
        Ok(doc)
    }
}
