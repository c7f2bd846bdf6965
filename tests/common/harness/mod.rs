//! Test harness for end-to-end CLI tests.

mod command;
mod env;

pub use command::VocabCommand;
pub use env::TestEnv;
