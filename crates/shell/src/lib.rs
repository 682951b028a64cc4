//! Console front end for the storefront inventory.
//!
//! Everything here is glue: reading menu choices and numbers, calling the
//! inventory manager, printing outcomes. Input and output are generic so whole
//! sessions can run against in-memory buffers.

pub mod config;
pub mod error;
pub mod menu;
pub mod seed;
pub mod shell;

pub use config::ShellConfig;
pub use error::{ShellError, ShellResult};
pub use menu::{MenuChoice, Trade};
pub use shell::Shell;
