//! Built-in health checks for the viewer's subsystems

use sysinfo::System;

use super::{CheckResult, HealthCheck};
use crate::app::AppConfig;
use crate::build_info;
use crate::scene::{Room, RoomCamera};

/// Checks that configuration can be loaded for all profiles
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a new config check with default profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    /// Creates a config check with custom profiles
    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates configuration loading from files and environment")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut all_success = true;
        let mut has_warnings = false;

        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) => {
                    details.push(format!(
                        "  ✓ Profile '{}': loaded successfully (window: {}x{})",
                        profile, config.window.width, config.window.height
                    ));
                }
                Err(e) => {
                    details.push(format!("  ✗ Profile '{}': failed to load - {}", profile, e));
                    all_success = false;
                }
            }
        }

        match AppConfig::load_from_env() {
            Ok(config) => {
                details.push(format!(
                    "  ✓ Environment config: profile '{}' loaded",
                    config.profile
                ));
            }
            Err(e) => {
                details.push(format!("  ⚠ Environment config: {}", e));
                has_warnings = true;
            }
        }

        let details_str = details.join("\n");

        if !all_success {
            CheckResult::fail("Failed to load one or more config profiles")
                .with_details(details_str)
        } else if has_warnings {
            CheckResult::warn("Config loaded with warnings").with_details(details_str)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details_str)
        }
    }
}

/// Checks that the scene geometry and camera uphold their invariants
pub struct SceneCheck;

impl SceneCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SceneCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for SceneCheck {
    fn name(&self) -> &'static str {
        "Scene"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates room geometry generation and camera transforms")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        let room = Room::default();
        let s = room.half_extent() as f32;
        let segments = room.wireframe();
        details.push(format!(
            "  ✓ Room generated: {} segments (half-extent {})",
            segments.len(),
            room.half_extent()
        ));

        let expected = 10 * room.grid_lines();
        if segments.len() != expected {
            details.push(format!(
                "  ✗ Expected {} segments, got {}",
                expected,
                segments.len()
            ));
            return CheckResult::fail("Room segment count mismatch")
                .with_details(details.join("\n"));
        }
        details.push(format!("  ✓ Segment count matches: {}", expected));

        for segment in &segments {
            let from = segment.from.to_array();
            let to = segment.to.to_array();
            let differing = from.iter().zip(to.iter()).filter(|(a, b)| a != b).count();
            if differing != 1 {
                details.push(format!("  ✗ Non-axis-aligned segment: {:?}", segment));
                return CheckResult::fail("Room geometry is not axis-aligned")
                    .with_details(details.join("\n"));
            }
            if from.iter().chain(to.iter()).any(|c| c.abs() > s) {
                details.push(format!("  ✗ Segment outside room bounds: {:?}", segment));
                return CheckResult::fail("Room geometry out of bounds")
                    .with_details(details.join("\n"));
            }
        }
        details.push("  ✓ All segments axis-aligned and inside the room".to_string());

        if room.wireframe() != segments {
            details.push("  ✗ Wireframe output changed between calls".to_string());
            return CheckResult::fail("Room geometry is not deterministic")
                .with_details(details.join("\n"));
        }
        details.push("  ✓ Wireframe output is deterministic".to_string());

        let camera = RoomCamera::default();
        if !camera.view_projection().is_finite() {
            details.push("  ✗ Camera view-projection is not finite".to_string());
            return CheckResult::fail("Camera transform invalid").with_details(details.join("\n"));
        }
        details.push("  ✓ Camera view-projection is finite".to_string());

        CheckResult::pass("Scene geometry and camera valid").with_details(details.join("\n"))
    }
}

/// Checks that build information is accessible and valid
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (git, rustc, timestamps)")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        details.push(format!(
            "  Git: {}@{} (dirty: {})",
            build_info::GIT_BRANCH,
            build_info::git_sha_short(),
            build_info::is_git_dirty()
        ));
        details.push(format!("  Build time: {}", build_info::BUILD_TIMESTAMP));
        details.push(format!(
            "  Rustc: {} ({})",
            build_info::RUSTC_SEMVER,
            build_info::RUSTC_CHANNEL
        ));
        details.push(format!("  Target: {}", build_info::CARGO_TARGET_TRIPLE));
        details.push(format!("  Opt level: {}", build_info::CARGO_OPT_LEVEL));

        CheckResult::pass("Build metadata accessible").with_details(details.join("\n"))
    }
}

/// Checks that wgpu can enumerate graphics adapters
pub struct GraphicsAdapterCheck;

impl GraphicsAdapterCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GraphicsAdapterCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for GraphicsAdapterCheck {
    fn name(&self) -> &'static str {
        "Graphics Adapter"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates wgpu instance creation and adapter availability")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        details.push("  ✓ wgpu instance created".to_string());

        let adapters = instance.enumerate_adapters(wgpu::Backends::all());

        if adapters.is_empty() {
            // Headless CI machines routinely have no adapter at all; the
            // viewer itself cannot run there, but the rest of the crate can
            details.push("  ⚠ No graphics adapters found".to_string());
            return CheckResult::warn("No graphics adapters (headless environment?)")
                .with_details(details.join("\n"));
        }

        details.push(format!("  ✓ Found {} adapter(s)", adapters.len()));

        let mut has_discrete = false;
        let mut backend_types = std::collections::HashSet::new();

        for (i, adapter) in adapters.iter().enumerate() {
            let info = adapter.get_info();
            backend_types.insert(format!("{:?}", info.backend));

            let device_type = match info.device_type {
                wgpu::DeviceType::DiscreteGpu => {
                    has_discrete = true;
                    "Discrete GPU"
                }
                wgpu::DeviceType::IntegratedGpu => "Integrated GPU",
                wgpu::DeviceType::VirtualGpu => "Virtual GPU",
                wgpu::DeviceType::Cpu => "CPU",
                wgpu::DeviceType::Other => "Other",
            };

            details.push(format!(
                "    [{i}] {} - {} ({:?})",
                info.name, device_type, info.backend
            ));
        }

        details.push(format!(
            "  Backends available: {}",
            backend_types.into_iter().collect::<Vec<_>>().join(", ")
        ));

        if has_discrete {
            CheckResult::pass(format!(
                "{} adapters found (discrete GPU available)",
                adapters.len()
            ))
            .with_details(details.join("\n"))
        } else {
            CheckResult::warn(format!("{} adapters found (no discrete GPU)", adapters.len()))
                .with_details(details.join("\n"))
        }
    }
}

/// Checks that system information can be gathered
pub struct SystemInfoCheck;

impl SystemInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for SystemInfoCheck {
    fn name(&self) -> &'static str {
        "System Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates OS, CPU, and memory information gathering")
    }

    fn check(&self) -> CheckResult {
        let mut sys = System::new_all();
        sys.refresh_all();

        let mut details = Vec::new();

        let os_name = System::name().unwrap_or_else(|| "Unknown".to_string());
        let os_version = System::os_version().unwrap_or_else(|| "Unknown".to_string());
        let kernel_version = System::kernel_version().unwrap_or_else(|| "Unknown".to_string());

        details.push(format!("  OS: {} {}", os_name, os_version));
        details.push(format!("  Kernel: {}", kernel_version));

        let physical_cores = System::physical_core_count().unwrap_or(0);
        let logical_cores = sys.cpus().len();

        if physical_cores == 0 || logical_cores == 0 {
            return CheckResult::warn("Unable to detect CPU cores")
                .with_details(details.join("\n"));
        }

        details.push(format!(
            "  CPU cores: {} physical, {} logical",
            physical_cores, logical_cores
        ));

        let total_memory_gb = sys.total_memory() as f64 / 1_073_741_824.0;

        if total_memory_gb < 1.0 {
            return CheckResult::warn("Low memory detected").with_details(details.join("\n"));
        }

        details.push(format!("  Memory: {:.1} GB total", total_memory_gb));

        if let Some(hostname) = System::host_name() {
            details.push(format!("  Hostname: {}", hostname));
        }

        CheckResult::pass("System info gathered successfully").with_details(details.join("\n"))
    }
}
