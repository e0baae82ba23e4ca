use anyhow::{Context, Result};
use clap::Parser;
use samba_version_fact::cli::{render_facts, SambaVersionCli};
use samba_version_fact::facts::{collect_facts, OsIdentity, OsRelease, StaticOs};
use samba_version_fact::{ProbeConfig, VersionProbe};
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = SambaVersionCli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting samba-version v{}", env!("CARGO_PKG_VERSION"));

    let base = match cli.config {
        Some(ref path) => ProbeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ProbeConfig::default(),
    };
    let config = cli.apply(base);

    let identity: Box<dyn OsIdentity> = match (&config.os, &config.os_release_path) {
        (Some(os), _) => Box::new(StaticOs::new(os.clone())),
        (None, Some(path)) => Box::new(OsRelease::with_paths(path, "/etc/lsb-release")),
        (None, None) => Box::new(OsRelease::new()),
    };

    let probe = VersionProbe::new()
        .with_package(config.package.clone())
        .with_default_version(config.default_version.clone());

    let registry = collect_facts(&config, &probe, identity.as_ref());
    let facts = registry.resolve_all();
    info!(fact = %config.fact_name, value = ?facts.get(&config.fact_name), "Fact resolved");

    let rendered = render_facts(&facts, cli.format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}
