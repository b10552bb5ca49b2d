//! Build script capturing the compiler version for the system-info surface.
//!
//! The runtime reports `processRuntimeVersion` in system snapshots; the
//! value is baked in at build time so the binary does not need a toolchain
//! installed where it runs.

use std::process::Command;

fn main() {
    let version = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "rustc (version unknown)".to_string());

    println!("cargo:rustc-env=TASKDECK_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-changed=build.rs");
}
