//! Helper functions shared by the loader, the CLI and the server

mod date;

pub use date::*;
