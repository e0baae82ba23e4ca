use crate::config::ProbeConfig;
use clap::Parser;
use std::path::PathBuf;

/// Report the installed Samba version as a host fact
#[derive(Parser, Debug)]
#[command(name = "samba-version")]
#[command(about = "Report the installed Samba version as a host fact")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct SambaVersionCli {
    /// Operating system identifier (auto-detect from os-release)
    #[arg(long)]
    pub os: Option<String>,

    /// Package to look up
    #[arg(short, long)]
    pub package: Option<String>,

    /// Fact name to publish the version under
    #[arg(long)]
    pub fact_name: Option<String>,

    /// Configuration file (JSON or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bare value, or `name => value` lines for several facts
    Text,
    Json,
    Yaml,
}

impl SambaVersionCli {
    /// Apply command line overrides on top of `base`.
    pub fn apply(&self, mut base: ProbeConfig) -> ProbeConfig {
        if let Some(ref os) = self.os {
            base.os = Some(os.clone());
        }
        if let Some(ref package) = self.package {
            base.package = package.clone();
        }
        if let Some(ref fact_name) = self.fact_name {
            base.fact_name = fact_name.clone();
        }
        base
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}
