pub mod analysis;
pub mod diagnostic;
pub mod driver;
pub mod error;
pub mod repl;
pub mod stats;
pub mod timer;
pub mod tokens;
