//! Build-time information
//!
//! This module provides access to build metadata captured at compile time,
//! including build timestamps, git state, cargo configuration, and compiler
//! version.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu, x86_64-apple-darwin)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.85.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Git commit SHA at build time
pub const GIT_SHA: &str = env!("VERGEN_GIT_SHA");

/// Git branch at build time
pub const GIT_BRANCH: &str = env!("VERGEN_GIT_BRANCH");

/// Whether the working tree was dirty at build time ("true"/"false")
pub const GIT_DIRTY: &str = env!("VERGEN_GIT_DIRTY");

/// Returns a shortened git SHA suitable for display
pub fn git_sha_short() -> &'static str {
    if GIT_SHA.len() > 8 { &GIT_SHA[..8] } else { GIT_SHA }
}

/// Returns true if the working tree had uncommitted changes at build time
pub fn is_git_dirty() -> bool {
    GIT_DIRTY == "true"
}

/// Returns a formatted build version string
///
/// Format: `{target_triple}-opt{opt_level}`
/// Example: `x86_64-unknown-linux-gnu-opt0`
pub fn version_string() -> String {
    format!("{}-opt{}", CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL)
}

/// Returns a detailed build info string
pub fn detailed_info() -> String {
    format!(
        "Built: {}\nGit: {}@{} (dirty: {})\nTarget: {}\nOptimization: {}\nRustc: {} ({})",
        BUILD_TIMESTAMP,
        GIT_BRANCH,
        git_sha_short(),
        is_git_dirty(),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL,
        RUSTC_SEMVER,
        RUSTC_CHANNEL
    )
}
