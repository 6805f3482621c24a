// Core modules of the crate
pub mod autograd;
pub mod error;
pub mod graph;
pub mod ops;
pub mod value;

// Neural-network composition layer built on top of the engine
pub mod nn;

// Re-export the main entry points so they are reachable directly via
// `scalargrad_core::Graph` / `scalargrad_core::Value`.
pub use graph::{Graph, NodeId};
pub use value::Value;

pub use error::ScalarGradError;
