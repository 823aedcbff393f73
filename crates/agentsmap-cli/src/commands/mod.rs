//! Command implementations for agentsmap-cli

pub mod discover;
pub mod init;
pub mod resolve;
pub mod validate;

pub use discover::run_discover;
pub use init::run_init;
pub use resolve::run_resolve;
pub use validate::run_validate;
