//! Profile containers and their construction-time rules.

pub mod node;
mod rules;

// Re-export key types for convenient access
pub use node::{Child, NodeRole, ProfileNode};
