// Infrastructure layer
pub mod bench;
pub mod pipeline;

pub use bench::*;
pub use pipeline::*;
