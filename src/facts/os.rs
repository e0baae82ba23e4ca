//! Operating system identity

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const OS_RELEASE: &str = "/etc/os-release";
const LSB_RELEASE: &str = "/etc/lsb-release";

/// Supplies the operating system identifier the version probe dispatches on
pub trait OsIdentity {
    fn operating_system(&self) -> Option<String>;
}

/// A fixed identifier, typically given on the command line
#[derive(Debug, Clone)]
pub struct StaticOs(String);

impl StaticOs {
    pub fn new(os: impl Into<String>) -> Self {
        Self(os.into())
    }
}

impl OsIdentity for StaticOs {
    fn operating_system(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads the distribution from os-release, falling back to lsb-release.
///
/// Identifiers are normalised to the names fact tooling conventionally uses
/// ("CentOS", "Ubuntu", "Archlinux").
#[derive(Debug, Clone)]
pub struct OsRelease {
    os_release: PathBuf,
    lsb_release: PathBuf,
    fallback: Option<String>,
}

impl OsRelease {
    pub fn new() -> Self {
        let fallback = if cfg!(target_os = "linux") {
            None
        } else {
            Some(kernel_name(std::env::consts::OS))
        };

        Self {
            os_release: PathBuf::from(OS_RELEASE),
            lsb_release: PathBuf::from(LSB_RELEASE),
            fallback,
        }
    }

    /// Read from explicit files, with no kernel-name fallback.
    pub fn with_paths(os_release: impl Into<PathBuf>, lsb_release: impl Into<PathBuf>) -> Self {
        Self {
            os_release: os_release.into(),
            lsb_release: lsb_release.into(),
            fallback: None,
        }
    }

    fn read_key(path: &Path, key: &str) -> Option<String> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Release file unreadable");
                return None;
            }
        };
        parse_release_value(&content, key)
    }
}

impl Default for OsRelease {
    fn default() -> Self {
        Self::new()
    }
}

impl OsIdentity for OsRelease {
    fn operating_system(&self) -> Option<String> {
        Self::read_key(&self.os_release, "ID")
            .or_else(|| Self::read_key(&self.lsb_release, "DISTRIB_ID"))
            .map(|id| normalize_distribution(&id))
            .or_else(|| self.fallback.clone())
    }
}

/// Value of `key` in a shell-style `KEY=value` release file
pub fn parse_release_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|v| !v.is_empty())
}

pub fn normalize_distribution(id: &str) -> String {
    match id.to_lowercase().as_str() {
        "ubuntu" => "Ubuntu".to_string(),
        "debian" => "Debian".to_string(),
        "centos" => "CentOS".to_string(),
        "rhel" | "redhat" => "RedHat".to_string(),
        "fedora" => "Fedora".to_string(),
        "arch" | "archlinux" => "Archlinux".to_string(),
        "opensuse" | "opensuse-leap" | "opensuse-tumbleweed" => "OpenSuSE".to_string(),
        "sles" => "SLES".to_string(),
        "amzn" => "Amazon".to_string(),
        "almalinux" => "AlmaLinux".to_string(),
        "linuxmint" => "LinuxMint".to_string(),
        _ => title_case(id),
    }
}

fn kernel_name(os: &str) -> String {
    match os {
        "macos" => "Darwin".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "windows" => "windows".to_string(),
        other => title_case(other),
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn release_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_release_value() {
        let content = "# comment\nNAME=\"CentOS Linux\"\nID=\"centos\"\nVERSION_ID='7'\n";
        assert_eq!(parse_release_value(content, "ID").as_deref(), Some("centos"));
        assert_eq!(parse_release_value(content, "VERSION_ID").as_deref(), Some("7"));
        assert_eq!(parse_release_value(content, "ID_LIKE"), None);
    }

    #[test]
    fn test_normalize_distribution() {
        assert_eq!(normalize_distribution("ubuntu"), "Ubuntu");
        assert_eq!(normalize_distribution("centos"), "CentOS");
        assert_eq!(normalize_distribution("arch"), "Archlinux");
        assert_eq!(normalize_distribution("rhel"), "RedHat");
        assert_eq!(normalize_distribution("gentoo"), "Gentoo");
    }

    #[test]
    fn test_os_release_preferred() {
        let os_release = release_file("NAME=\"Arch Linux\"\nID=arch\n");
        let lsb_release = release_file("DISTRIB_ID=Ubuntu\n");
        let identity = OsRelease::with_paths(os_release.path(), lsb_release.path());
        assert_eq!(identity.operating_system().as_deref(), Some("Archlinux"));
    }

    #[test]
    fn test_lsb_release_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let lsb_release = release_file("DISTRIB_ID=Debian\nDISTRIB_RELEASE=10\n");
        let identity = OsRelease::with_paths(dir.path().join("os-release"), lsb_release.path());
        assert_eq!(identity.operating_system().as_deref(), Some("Debian"));
    }

    #[test]
    fn test_missing_release_files() {
        let dir = tempfile::tempdir().unwrap();
        let identity =
            OsRelease::with_paths(dir.path().join("os-release"), dir.path().join("lsb-release"));
        assert_eq!(identity.operating_system(), None);
    }

    #[test]
    fn test_kernel_name() {
        assert_eq!(kernel_name("macos"), "Darwin");
        assert_eq!(kernel_name("windows"), "windows");
        assert_eq!(kernel_name("solaris"), "Solaris");
    }

    #[test]
    fn test_static_os() {
        assert_eq!(StaticOs::new("CentOS").operating_system().as_deref(), Some("CentOS"));
    }
}
