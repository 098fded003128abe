//! `customer-list` - A singly linked list of customer records
//!
//! This library provides the record list itself, the interactive menu session
//! that drives it, and the configuration and logging shared by the `custlist`
//! binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod list;
pub mod logging;
pub mod record;
pub mod session;

pub use config::Config;
pub use error::{Error, Result};
pub use list::RecordList;
pub use logging::init_logging;
pub use record::Record;
pub use session::Session;
