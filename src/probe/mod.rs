//! Package version probe
//!
//! Picks a package manager from the operating system identifier, runs a
//! single metadata query against it and extracts the version string.

pub mod extract;
pub mod runner;

pub use runner::{CommandRunner, SystemCommandRunner};

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Package queried when none is configured
pub const DEFAULT_PACKAGE: &str = "samba";

/// Value reported for operating systems no lookup rule covers
pub const DEFAULT_VERSION: &str = "0.0.0";

static REDHAT_FAMILY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)RedHatEnterprise|CentOS|Fedora|RHEL").expect("valid RedHat family pattern")
});

static DEBIAN_FAMILY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Ubuntu|Debian").expect("valid Debian family pattern"));

/// Version lookup branch selected for an operating system identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// `yum info`, guarded by a search-path check
    RedHat,
    /// `apt-cache show`, guarded by a search-path check
    Debian,
    /// `pacman -Si`, run unconditionally
    Archlinux,
    Unknown,
}

impl OsFamily {
    /// Families are checked in order and the first match wins. The RedHat and
    /// Debian families match anywhere in the identifier; Archlinux must match
    /// exactly.
    pub fn classify(os: &str) -> Self {
        if REDHAT_FAMILY.is_match(os) {
            OsFamily::RedHat
        } else if DEBIAN_FAMILY.is_match(os) {
            OsFamily::Debian
        } else if os == "Archlinux" {
            OsFamily::Archlinux
        } else {
            OsFamily::Unknown
        }
    }
}

pub struct VersionProbe<R = SystemCommandRunner> {
    runner: R,
    package: String,
    default_version: String,
}

impl VersionProbe<SystemCommandRunner> {
    pub fn new() -> Self {
        Self::with_runner(SystemCommandRunner::new())
    }
}

impl Default for VersionProbe<SystemCommandRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> VersionProbe<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            package: DEFAULT_PACKAGE.to_string(),
            default_version: DEFAULT_VERSION.to_string(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Look up the installed package version for `os`.
    ///
    /// Returns `None` when the package manager is missing or cannot be
    /// started, an empty string when its output has no version line, and the
    /// default version when `os` belongs to no known family.
    pub fn probe(&self, os: &str) -> Option<String> {
        let family = OsFamily::classify(os);
        debug!(os, ?family, package = %self.package, "Selected version lookup");

        let version = match family {
            OsFamily::RedHat => {
                let yum = self.locate("yum")?;
                let output = self.runner.run(&yum, &["info", &self.package])?;
                extract::yum_version(&output)
            }
            OsFamily::Debian => {
                let apt_cache = self.locate("apt-cache")?;
                let output = self.runner.run(&apt_cache, &["show", &self.package])?;
                extract::apt_version(&output)
            }
            OsFamily::Archlinux => {
                let output = self
                    .runner
                    .run(Path::new("pacman"), &["-Si", &self.package])?;
                extract::pacman_version(&output)
            }
            OsFamily::Unknown => self.default_version.clone(),
        };

        debug!(os, version = %version, "Resolved package version");
        Some(version)
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        let path = self.runner.which(program);
        if path.is_none() {
            debug!(program, "Package manager unavailable, leaving version unset");
        }
        path
    }
}
