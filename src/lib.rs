//! Samba version fact
//!
//! This crate detects the installed Samba version on a host by asking the
//! native package manager (yum, apt-cache or pacman) and publishes it as the
//! `samba_version` fact.

pub mod cli;
pub mod config;
pub mod error;
pub mod facts;
pub mod probe;

pub use config::ProbeConfig;
pub use error::{ConfigError, OutputError};
pub use facts::{FactRegistry, OsIdentity, OsRelease, StaticOs};
pub use probe::{CommandRunner, OsFamily, SystemCommandRunner, VersionProbe};
