//! The chart family: every way a group of datapoints can be laid out.

pub mod column;
pub mod doughnut;
pub mod line;
pub mod stat;
pub mod width;

// Re-export key types for convenient access
pub use column::{ColumnChart, GroupedColumnChart};
pub use doughnut::DoughnutChart;
pub use line::LineChart;
pub use stat::StatList;
pub use width::ColumnWidth;

use crate::datapoint::ShoppingList;
use crate::document::Document;
use crate::error::PopulateError;

/// A chart of any kind, ready to sit inside a profile node.
///
/// Tagged union over the concrete variants; the tree dispatches by `match`
/// rather than inheritance.
pub enum Chart<C> {
    Stat(StatList<C>),
    Column(ColumnChart<C>),
    GroupedColumn(GroupedColumnChart<C>),
    Doughnut(DoughnutChart<C>),
    Line(LineChart<C>),
}

impl<C> Chart<C> {
    pub fn name(&self) -> &str {
        match self {
            Chart::Stat(c) => c.name(),
            Chart::Column(c) => c.name(),
            Chart::GroupedColumn(c) => c.name(),
            Chart::Doughnut(c) => c.name(),
            Chart::Line(c) => c.name(),
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Chart::Stat(c) => c.identifier(),
            Chart::Column(c) => c.identifier(),
            Chart::GroupedColumn(c) => c.identifier(),
            Chart::Doughnut(c) => c.identifier(),
            Chart::Line(c) => c.identifier(),
        }
    }

    pub fn width(&self) -> ColumnWidth {
        match self {
            Chart::Stat(c) => c.width(),
            Chart::Column(c) => c.width(),
            Chart::GroupedColumn(c) => c.width(),
            Chart::Doughnut(c) => c.width(),
            Chart::Line(c) => c.width(),
        }
    }

    /// Union of the children's dependency declarations, duplicate-free.
    pub fn shopping_list(&self) -> ShoppingList {
        match self {
            Chart::Stat(c) => c.shopping_list(),
            Chart::Column(c) => c.shopping_list(),
            Chart::GroupedColumn(c) => c.shopping_list(),
            Chart::Doughnut(c) => c.shopping_list(),
            Chart::Line(c) => c.shopping_list(),
        }
    }

    /// Assembles the variant-tagged sub-document for one request.
    pub fn populate(&self, ctx: &C) -> Result<Document, PopulateError> {
        match self {
            Chart::Stat(c) => c.populate(ctx),
            Chart::Column(c) => c.populate(ctx),
            Chart::GroupedColumn(c) => c.populate(ctx),
            Chart::Doughnut(c) => c.populate(ctx),
            Chart::Line(c) => c.populate(ctx),
        }
    }
}

impl<C> From<StatList<C>> for Chart<C> {
    fn from(c: StatList<C>) -> Self {
        Chart::Stat(c)
    }
}

impl<C> From<ColumnChart<C>> for Chart<C> {
    fn from(c: ColumnChart<C>) -> Self {
        Chart::Column(c)
    }
}

impl<C> From<GroupedColumnChart<C>> for Chart<C> {
    fn from(c: GroupedColumnChart<C>) -> Self {
        Chart::GroupedColumn(c)
    }
}

impl<C> From<DoughnutChart<C>> for Chart<C> {
    fn from(c: DoughnutChart<C>) -> Self {
        Chart::Doughnut(c)
    }
}

impl<C> From<LineChart<C>> for Chart<C> {
    fn from(c: LineChart<C>) -> Self {
        Chart::Line(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datapoint::{BoxedDataPoint, DataPoint, ValueSet};
    use crate::document::Fragment;
    use crate::value::Numeric;

    /// Depends on a fixed key and answers with a fixed value.
    struct KeyedPoint {
        name: &'static str,
        key: &'static str,
    }

    impl DataPoint<()> for KeyedPoint {
        fn name(&self) -> &str {
            self.name
        }

        fn shopping_list(&self) -> ShoppingList {
            ShoppingList::from([self.key.to_string()])
        }

        fn evaluate(&self, _ctx: &()) -> Result<ValueSet, PopulateError> {
            Ok(ValueSet::from([(
                "this".to_string(),
                Numeric::new(1.0, 0.0).into(),
            )]))
        }
    }

    fn keyed(name: &'static str, key: &'static str) -> BoxedDataPoint<()> {
        Box::new(KeyedPoint { name, key })
    }

    #[test]
    fn shopping_list_collapses_duplicates_across_columns() {
        let chart = ColumnChart::new(
            "pair",
            "pair_chart",
            ColumnWidth::Half,
            vec![keyed("a", "alpha"), keyed("b", "alpha"), keyed("c", "beta")],
        );
        assert_eq!(
            chart.shopping_list(),
            ShoppingList::from(["alpha".to_string(), "beta".to_string()])
        );
    }

    #[test]
    fn grouped_shopping_list_unions_child_charts() {
        let grouped = GroupedColumnChart::new(
            "grouped",
            "grouped_chart",
            ColumnWidth::Full,
            vec![
                ColumnChart::new("one", "one", ColumnWidth::Half, vec![keyed("a", "alpha")]),
                ColumnChart::new("two", "two", ColumnWidth::Half, vec![keyed("b", "beta")]),
            ],
        );
        assert_eq!(
            grouped.shopping_list(),
            ShoppingList::from(["alpha".to_string(), "beta".to_string()])
        );
    }

    #[test]
    fn column_populate_carries_name_and_tag() {
        let chart = ColumnChart::new(
            "pair",
            "pair_chart",
            ColumnWidth::Half,
            vec![keyed("a", "alpha")],
        );
        let doc = chart.populate(&()).unwrap();
        assert_eq!(doc["name"], Fragment::Text("pair".to_string()));
        assert_eq!(doc["chart_type"], Fragment::Text("column".to_string()));
        assert!(matches!(doc["a"], Fragment::Map(_)));
    }

    #[test]
    fn sub_populate_omits_the_metadata_wrapper() {
        let chart = ColumnChart::new(
            "pair",
            "pair_chart",
            ColumnWidth::Half,
            vec![keyed("a", "alpha")],
        );
        let doc = chart.sub_populate(&()).unwrap();
        assert!(!doc.contains_key("name"));
        assert!(!doc.contains_key("chart_type"));
        assert!(doc.contains_key("a"));
    }

    #[test]
    fn grouped_populate_embeds_children_without_wrappers() {
        let grouped = GroupedColumnChart::new(
            "grouped",
            "grouped_chart",
            ColumnWidth::Full,
            vec![ColumnChart::new(
                "inner",
                "inner",
                ColumnWidth::Half,
                vec![keyed("a", "alpha")],
            )],
        );
        let doc = grouped.populate(&()).unwrap();
        assert_eq!(
            doc["chart_type"],
            Fragment::Text("grouped_column".to_string())
        );
        match &doc["inner"] {
            Fragment::Map(inner) => {
                assert!(!inner.contains_key("name"));
                assert!(!inner.contains_key("chart_type"));
                assert!(inner.contains_key("a"));
            }
            other => panic!("expected embedded map, got {:?}", other),
        }
    }

    #[test]
    fn stat_list_populate_has_no_chart_type() {
        let stat = StatList::new("pop", "pop_stat", ColumnWidth::Quarter, keyed("s", "sigma"));
        let doc = stat.populate(&()).unwrap();
        assert_eq!(doc.len(), 1);
        assert!(matches!(doc["stat"], Fragment::Map(_)));
    }

    #[test]
    fn doughnut_and_line_tags() {
        let pie = DoughnutChart::new(
            "shares",
            "shares",
            ColumnWidth::Third,
            vec![keyed("a", "alpha")],
        );
        assert_eq!(
            pie.populate(&()).unwrap()["chart_type"],
            Fragment::Text("pie".to_string())
        );

        let line = LineChart::new(
            "trend",
            "trend",
            ColumnWidth::Third,
            vec![keyed("a", "alpha")],
        );
        assert_eq!(
            line.populate(&()).unwrap()["chart_type"],
            Fragment::Text("line".to_string())
        );
    }

    #[test]
    fn doughnut_with_undeclared_slices_still_answers_the_contract() {
        struct Quiet;
        impl DataPoint<()> for Quiet {
            fn name(&self) -> &str {
                "quiet"
            }
            fn evaluate(&self, _ctx: &()) -> Result<ValueSet, PopulateError> {
                Ok(ValueSet::new())
            }
        }
        let pie = DoughnutChart::new("q", "q", ColumnWidth::Quarter, vec![Box::new(Quiet)]);
        assert!(pie.shopping_list().is_empty());
    }
}
