//! External demo database invocation

mod runner;

pub use runner::DemoRunner;
