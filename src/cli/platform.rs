//! Firmware services reached by the built-in commands.
//!
//! The CLI never talks to hardware directly. Timers, entropy, the latency
//! registry, the indicator LED and the reset/reload paths are all behind
//! [`Platform`], which the target implements once. Every method has an
//! inert default so a board only overrides what it actually has.
//!
//! ```rust
//! use kbcli::cli::platform::Platform;
//!
//! struct Board {
//!     cycles: u32,
//! }
//!
//! impl Platform for Board {
//!     fn periodic_cycles(&self) -> u32 {
//!         self.cycles
//!     }
//!
//!     fn set_periodic_cycles(&mut self, cycles: u32) {
//!         self.cycles = cycles;
//!     }
//! }
//! ```

/// Aggregated timing for one latency resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatencyStats {
    /// Number of samples.
    pub count: u32,
    /// Shortest sample.
    pub min: u32,
    /// Mean of all samples.
    pub average: u32,
    /// Most recent sample.
    pub last: u32,
    /// Longest sample.
    pub max: u32,
}

/// A point in time as `<systick ms>:<cycle ticks since systick>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp {
    /// Milliseconds since boot.
    pub ms: u32,
    /// Cycle ticks since the last millisecond tick.
    pub ticks: u32,
}

/// Build metadata shown by `version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Source revision identifier.
    pub revision: &'static str,
    /// Sequential revision number.
    pub revision_number: &'static str,
    /// Release version.
    pub version: &'static str,
    /// Source branch.
    pub branch: &'static str,
    /// Working tree state at build time, with any modified files.
    pub tree_status: &'static str,
    /// Repository the firmware was built from.
    pub repo_origin: &'static str,
    /// Date of the built commit.
    pub commit_date: &'static str,
    /// Author of the built commit.
    pub commit_author: &'static str,
    /// Build date.
    pub build_date: &'static str,
    /// Operating system of the build host.
    pub build_os: &'static str,
    /// Compiler used for the build.
    pub compiler: &'static str,
    /// Target architecture.
    pub arch: &'static str,
    /// Microcontroller the firmware was compiled for.
    pub chip: &'static str,
    /// CPU core.
    pub cpu: &'static str,
    /// Keyboard / device name.
    pub device: &'static str,
    /// Firmware modules linked in.
    pub modules: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            revision: "unknown",
            revision_number: "unknown",
            version: env!("CARGO_PKG_VERSION"),
            branch: "unknown",
            tree_status: "unknown",
            repo_origin: "unknown",
            commit_date: "unknown",
            commit_author: "unknown",
            build_date: "unknown",
            build_os: "unknown",
            compiler: "rustc",
            arch: "unknown",
            chip: "unknown",
            cpu: "unknown",
            device: "unknown",
            modules: "cli",
        }
    }
}

/// Firmware collaborators of the built-in commands.
pub trait Platform {
    /// Clock cycles between periodic scans.
    fn periodic_cycles(&self) -> u32 {
        0
    }

    /// Reprogram the periodic scan timer.
    fn set_periodic_cycles(&mut self, _cycles: u32) {}

    /// A random value, or `None` while no entropy is available.
    fn random_u32(&mut self) -> Option<u32> {
        None
    }

    /// Number of latency resources being measured.
    fn latency_resources(&self) -> u8 {
        0
    }

    /// Display name of latency resource `index`.
    fn latency_name(&self, _index: u8) -> &str {
        ""
    }

    /// Timing of latency resource `index`.
    fn latency(&self, _index: u8) -> LatencyStats {
        LatencyStats::default()
    }

    /// Drive the indicator LED.
    fn set_indicator_led(&mut self, _on: bool) {}

    /// `true` if the firmware may be put into reflash mode from the CLI.
    fn flash_mode_enabled(&self) -> bool {
        false
    }

    /// Enter the bootloader for reflashing.
    fn firmware_reload(&mut self) {}

    /// Trigger a software restart.
    fn soft_reset(&mut self) {}

    /// Current time.
    fn now(&self) -> Timestamp {
        Timestamp::default()
    }

    /// Nanoseconds per cycle tick, preformatted.
    fn ns_per_tick(&self) -> &str {
        "0"
    }

    /// Build metadata.
    fn build_info(&self) -> BuildInfo {
        BuildInfo::default()
    }
}

/// Platform with no firmware services attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlatform;

impl Platform for NullPlatform {}
