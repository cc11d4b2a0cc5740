//! CLI command implementations.

pub mod check;
pub mod generate;
pub mod init;
pub mod preview;
pub mod show;
