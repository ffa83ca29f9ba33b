//! Stamps `SF_VERSION` for `sf --version`.
//!
//! Packagers building from a tarball can set `SF_VERSION` themselves; checkouts
//! use `git describe`, and anything else falls back to the crate version.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=SF_VERSION");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let version = env::var("SF_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe_checkout)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=SF_VERSION={version}");
}

fn describe_checkout() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    if described.is_empty() {
        return None;
    }

    // client-rust tags are v-prefixed
    Some(described.trim_start_matches('v').to_string())
}
