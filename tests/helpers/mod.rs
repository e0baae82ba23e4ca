//! Test doubles for package manager queries

use samba_version_fact::CommandRunner;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const YUM_INFO: &str = "\
Loaded plugins: fastestmirror
Installed Packages
Name        : samba
Arch        : x86_64
Version   : 4.9.1-1.el7
Release     : 1.el7
";

pub const APT_SHOW: &str = "\
Package: samba
Architecture: amd64
Version: 2:4.9.5+dfsg-5
Depends: python3:any
";

pub const PACMAN_SI: &str = "\
Repository      : extra
Name            : samba
Version         : 4.11.2-1
";

/// Canned package manager output and search-path contents
#[derive(Default)]
pub struct FakeRunner {
    on_path: HashSet<String>,
    outputs: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `program` on the search path and give it canned stdout.
    pub fn with_tool(mut self, program: &str, output: &str) -> Self {
        self.on_path.insert(program.to_string());
        self.outputs.insert(program.to_string(), output.to_string());
        self
    }

    /// Give `program` canned stdout without putting it on the search path.
    pub fn with_output(mut self, program: &str, output: &str) -> Self {
        self.outputs.insert(program.to_string(), output.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn which(&self, program: &str) -> Option<PathBuf> {
        self.on_path
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }

    fn run(&self, program: &Path, args: &[&str]) -> Option<String> {
        let name = program.file_name()?.to_str()?.to_string();
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", name, args.join(" ")));
        self.outputs.get(&name).cloned()
    }
}
