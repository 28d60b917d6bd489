//! Scene description module
//!
//! Provides the component tree: mounting, ancestor lookup, input updates
//! and ordered unmounting of declarative components.

mod component_tree;

pub use component_tree::{ComponentTree, NodeKey, NodeKind};
