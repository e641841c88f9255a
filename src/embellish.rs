//! Embellishments: extra key/value pairs merged into a node's output
//! alongside its children. Either a static pair fixed at configuration time
//! or a closure resolved fresh against the request context on every pass.

use crate::document::Fragment;

/// A value-or-callable output entry attached to a profile node.
pub enum Embellishment<C> {
    Static(String, Fragment),
    Computed(Box<dyn Fn(&C) -> (String, Fragment) + Send + Sync>),
}

impl<C> Embellishment<C> {
    pub fn fixed(key: impl Into<String>, value: impl Into<Fragment>) -> Self {
        Embellishment::Static(key.into(), value.into())
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&C) -> (String, Fragment) + Send + Sync + 'static,
    {
        Embellishment::Computed(Box::new(f))
    }

    /// The key, when it is knowable without a context. Computed keys are only
    /// checkable at population time.
    pub fn static_key(&self) -> Option<&str> {
        match self {
            Embellishment::Static(key, _) => Some(key),
            Embellishment::Computed(_) => None,
        }
    }

    /// Resolves the pair with the same context the enclosing node's populate
    /// pass received. Stateless: nothing is cached between passes.
    pub fn adorn(&self, ctx: &C) -> (String, Fragment) {
        match self {
            Embellishment::Static(key, value) => (key.clone(), value.clone()),
            Embellishment::Computed(f) => f(ctx),
        }
    }
}
