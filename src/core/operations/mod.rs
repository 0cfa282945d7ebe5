pub mod mutation;
pub mod operation;

pub use mutation::Mutation;
pub use operation::{CanvasOperation, Operation};
