//! Fact registration and host identity

pub mod os;
pub mod registry;

pub use os::{OsIdentity, OsRelease, StaticOs};
pub use registry::FactRegistry;

use crate::config::ProbeConfig;
use crate::probe::{CommandRunner, VersionProbe};
use tracing::debug;

/// Fact name the Samba version is published under
pub const SAMBA_VERSION_FACT: &str = "samba_version";

/// Probe `os` once and register the result under `name`.
///
/// The value is computed before registration; the resolver only hands back
/// its own copy.
pub fn register_samba_version<R: CommandRunner>(
    registry: &mut FactRegistry,
    name: &str,
    probe: &VersionProbe<R>,
    os: &str,
) {
    let version = probe.probe(os);
    debug!(fact = name, ?version, "Registering version fact");
    registry.add(name, move || version.clone());
}

/// Build a registry holding the version fact described by `config`.
///
/// A fixed `os` in the config takes precedence over `identity`. When neither
/// yields an identifier the probe runs against an empty one, which selects
/// the default version.
pub fn collect_facts<R: CommandRunner>(
    config: &ProbeConfig,
    probe: &VersionProbe<R>,
    identity: &dyn OsIdentity,
) -> FactRegistry {
    let os = config
        .os
        .clone()
        .or_else(|| identity.operating_system())
        .unwrap_or_default();

    let mut registry = FactRegistry::new();
    register_samba_version(&mut registry, &config.fact_name, probe, &os);
    registry
}
