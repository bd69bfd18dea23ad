//! DocVault application shell: configuration, tracing, dependency wiring and
//! the command line driver over the use cases.

pub mod bootstrap;
pub mod cli;
