mod types;
pub use types::*;

mod registry;
pub use registry::*;

mod generator;
pub use generator::*;
