//! Chrome plumbing: binary discovery, profile directories, process launch,
//! and a thin session wrapper over the DevTools Protocol connection.

mod chrome;
mod error;
mod profile;
mod session;
mod wait;

pub use chrome::{ChromeFinder, ChromeLauncher};
pub use error::{Error, Result};
pub use profile::ProfileDir;
pub use session::Session;
pub use wait::Wait;

pub use chromiumoxide::element::Element;
