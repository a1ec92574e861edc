mod controller;
pub use controller::*;

#[cfg(test)]
mod controller_tests;
