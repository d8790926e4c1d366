//! UI components.

pub mod edge_bundle;
