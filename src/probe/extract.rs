//! Version extraction from package manager output

use once_cell::sync::Lazy;
use regex::Regex;

static YUM_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Version *: ([0-9.]+)").expect("valid yum version pattern"));

// Greedy prefix: the capture starts after the last colon on the line, which
// drops the Debian epoch.
static APT_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Version:.*:([0-9.]+)").expect("valid apt version pattern"));

/// First `Version   : x.y.z` line of `yum info` output, digits and dots only.
pub fn yum_version(output: &str) -> String {
    first_capture(&YUM_VERSION, output)
}

/// First epoch-qualified `Version: e:x.y.z...` line of `apt-cache show` output.
///
/// Lines without an epoch do not match and yield an empty string.
pub fn apt_version(output: &str) -> String {
    first_capture(&APT_VERSION, output)
}

/// Third whitespace field of the first line mentioning `Version` in
/// `pacman -Si` output, with the `-<release>` suffix removed.
pub fn pacman_version(output: &str) -> String {
    output
        .lines()
        .find(|line| line.contains("Version"))
        .and_then(|line| line.split_whitespace().nth(2))
        .and_then(|field| field.split('-').next())
        .unwrap_or_default()
        .to_string()
}

fn first_capture(pattern: &Regex, output: &str) -> String {
    output
        .lines()
        .find_map(|line| pattern.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
