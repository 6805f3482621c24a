// Neural-network composition layer: plain compositions over the core engine.
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

pub use layers::{Layer, Neuron, MLP};
pub use module::Module;
