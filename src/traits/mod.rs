pub mod operation;
pub mod runner;

pub use operation::{NodeContext, Operation, PortValues};
pub use runner::{GraphRunner, SourceValues};
