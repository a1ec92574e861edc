mod traits;
pub use traits::*;

mod types;
pub use types::*;

mod search;
pub use search::*;

mod ingest;
pub use ingest::*;

#[cfg(test)]
mod mocks;


#[cfg(test)]
mod ingest_tests;
