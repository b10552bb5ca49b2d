//! Process and system metrics for the `system_info` tool and the status
//! endpoint.

use std::time::Duration;

use serde::Serialize;
use sysinfo::System;

/// Memory usage in bytes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MemorySnapshot {
    pub used: u64,
    pub total: u64,
}

/// Snapshot returned by the `system_info` tool.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub platform: String,
    pub process_runtime_version: String,
    pub memory: MemorySnapshot,
    pub uptime_seconds: u64,
}

/// Compiler version baked in at build time by `build.rs`.
pub fn runtime_version() -> &'static str {
    env!("TASKDECK_RUSTC_VERSION")
}

/// System-wide memory usage.
pub fn memory() -> MemorySnapshot {
    let mut sys = System::new();
    sys.refresh_memory();
    MemorySnapshot {
        used: sys.used_memory(),
        total: sys.total_memory(),
    }
}

/// Global CPU usage percentage. Usage is computed against a previous
/// measurement, so the first sample in a fresh process reports 0.
pub fn cpu_usage() -> f32 {
    let mut sys = System::new();
    sys.refresh_cpu_usage();
    sys.global_cpu_usage()
}

/// Full snapshot for the given process uptime.
pub fn snapshot(uptime: Duration) -> SystemInfo {
    SystemInfo {
        platform: std::env::consts::OS.to_string(),
        process_runtime_version: runtime_version().to_string(),
        memory: memory(),
        uptime_seconds: uptime.as_secs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reports_platform_memory_and_uptime() {
        let info = snapshot(Duration::from_secs(42));
        assert_eq!(info.platform, std::env::consts::OS);
        assert_eq!(info.uptime_seconds, 42);
        assert!(info.memory.total >= info.memory.used);
        assert!(info.memory.total > 0);
        assert!(!info.process_runtime_version.is_empty());
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(snapshot(Duration::from_secs(1))).unwrap();
        assert!(json.get("processRuntimeVersion").is_some());
        assert!(json.get("uptimeSeconds").is_some());
        assert!(json["memory"].get("used").is_some());
        assert!(json["memory"].get("total").is_some());
    }
}
