//! The profile node family: the containers that compose charts and further
//! nodes into one report tree.

use tracing::{debug, trace};

use crate::charts::Chart;
use crate::datapoint::ShoppingList;
use crate::document::{Document, Fragment};
use crate::embellish::Embellishment;
use crate::error::{ConfigError, PopulateError};
use crate::profile::rules;

/// The role a container plays in the report.
///
/// Rows, sections, and the top-level profile share one structure; the role
/// is there for downstream consumers (and row-only validation), not for
/// behavioral differences between passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Row,
    Section,
    Profile,
}

/// Anything a profile node may contain: a further container or a chart.
pub enum Child<C> {
    Node(ProfileNode<C>),
    Chart(Chart<C>),
}

impl<C> Child<C> {
    pub fn name(&self) -> &str {
        match self {
            Child::Node(node) => node.name(),
            Child::Chart(chart) => chart.name(),
        }
    }

    pub fn shopping_list(&self) -> ShoppingList {
        match self {
            Child::Node(node) => node.shopping_list(),
            Child::Chart(chart) => chart.shopping_list(),
        }
    }

    pub fn populate(&self, ctx: &C) -> Result<Document, PopulateError> {
        match self {
            Child::Node(node) => node.populate(ctx),
            Child::Chart(chart) => chart.populate(ctx),
        }
    }
}

impl<C> From<ProfileNode<C>> for Child<C> {
    fn from(node: ProfileNode<C>) -> Self {
        Child::Node(node)
    }
}

impl<C> From<Chart<C>> for Child<C> {
    fn from(chart: Chart<C>) -> Self {
        Child::Chart(chart)
    }
}

/// A named container composing children into a sub-tree of the report.
///
/// Built once at configuration time and immutable afterwards. Children are
/// owned by value, so a node can never reference an ancestor: the tree shape
/// is guaranteed by ownership, not by a runtime cycle check. Per-request data
/// flows only through `populate` arguments and return values.
pub struct ProfileNode<C> {
    name: String,
    role: NodeRole,
    children: Vec<Child<C>>,
    embellishments: Vec<Embellishment<C>>,
}

impl<C> std::fmt::Debug for ProfileNode<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileNode")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("children", &self.children.len())
            .field("embellishments", &self.embellishments.len())
            .finish()
    }
}

impl<C> ProfileNode<C> {
    /// A horizontal row of charts. Fails when the chart children claim more
    /// than one full row of width.
    pub fn row(name: impl Into<String>, children: Vec<Child<C>>) -> Result<Self, ConfigError> {
        let name = name.into();
        rules::check_row_width(&name, &children)?;
        Ok(Self {
            name,
            role: NodeRole::Row,
            children,
            embellishments: Vec::new(),
        })
    }

    /// A mid-level grouping. No extra invariants.
    pub fn section(name: impl Into<String>, children: Vec<Child<C>>) -> Self {
        Self {
            name: name.into(),
            role: NodeRole::Section,
            children,
            embellishments: Vec::new(),
        }
    }

    /// The top-level document. No extra invariants.
    pub fn profile(name: impl Into<String>, children: Vec<Child<C>>) -> Self {
        Self {
            name: name.into(),
            role: NodeRole::Profile,
            children,
            embellishments: Vec::new(),
        }
    }

    /// Attaches embellishments, validating every statically knowable key.
    pub fn with_embellishments(
        mut self,
        embellishments: Vec<Embellishment<C>>,
    ) -> Result<Self, ConfigError> {
        rules::check_embellishment_keys(&self.name, &embellishments)?;
        self.embellishments = embellishments;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// The recursive, duplicate-free union of every child's dependency keys.
    pub fn shopping_list(&self) -> ShoppingList {
        let list: ShoppingList = self
            .children
            .iter()
            .flat_map(|child| child.shopping_list())
            .collect();
        debug!(node = %self.name, keys = list.len(), "collected shopping list");
        list
    }

    /// Recursively assembles this node's sub-document for one request.
    ///
    /// Every child appears under `children` keyed by its name; embellishments
    /// are resolved fresh and merged in beside. A computed embellishment key
    /// that collides with an existing entry fails the whole pass.
    pub fn populate(&self, ctx: &C) -> Result<Document, PopulateError> {
        trace!(node = %self.name, children = self.children.len(), "populating");

        let mut child_docs = Document::new();
        for child in &self.children {
            child_docs.insert(
                child.name().to_string(),
                Fragment::Map(child.populate(ctx)?),
            );
        }

        let mut doc = Document::new();
        doc.insert("name".to_string(), Fragment::Text(self.name.clone()));
        doc.insert("children".to_string(), Fragment::Map(child_docs));

        for embellishment in &self.embellishments {
            let (key, value) = embellishment.adorn(ctx);
            if doc.contains_key(&key) {
                return Err(PopulateError::KeyCollision {
                    node: self.name.clone(),
                    key,
                });
            }
            doc.insert(key, value);
        }

        Ok(doc)
    }
}
