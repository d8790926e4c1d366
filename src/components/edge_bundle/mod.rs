//! Radial hierarchical edge bundling: graph construction, layout, lock
//! state and the canvas component that draws it.

pub mod bilink;
mod component;
pub mod config;
pub mod curve;
pub mod hierarchy;
pub mod highlight;
pub mod layout;
pub mod links;
pub mod loader;
pub mod palette;
mod render;
pub mod state;
pub mod types;

pub use component::EdgeBundleCanvas;
pub use config::BundleConfig;
pub use loader::{LoadError, load_document, parse_document};
pub use types::{Import, TreeNode};
