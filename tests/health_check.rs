//! Integration tests for the health check system

use wire_room::health::{self, HealthCheck, HealthRunner, checks::*};

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks();

    // Print report for debugging if tests fail
    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed,
        report.warned
    );
}

#[test]
fn test_config_check() {
    let check = ConfigCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "Config check failed: {}",
        result.message
    );
}

#[test]
fn test_scene_check() {
    let check = SceneCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "Scene check failed: {}",
        result.message
    );
}

#[test]
fn test_build_info_check() {
    let check = BuildInfoCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "Build info check failed: {}",
        result.message
    );
}

#[test]
fn test_graphics_adapter_check() {
    // Warns (but does not fail) on machines without any adapter
    let check = GraphicsAdapterCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "Graphics adapter check failed: {}",
        result.message
    );
}

#[test]
fn test_system_info_check() {
    let check = SystemInfoCheck::new();
    let result = check.check();

    assert!(
        result.status.is_ok(),
        "System info check failed: {}",
        result.message
    );
}

#[test]
fn test_runner_collects_all_checks() {
    let report = HealthRunner::new()
        .add_check(ConfigCheck::new())
        .add_check(SceneCheck::new())
        .run();

    assert_eq!(report.total, 2, "Expected 2 checks in report");
    assert_eq!(report.passed + report.warned + report.failed, report.total);
}

#[test]
fn test_report_exit_codes() {
    let report = HealthRunner::new().add_check(ConfigCheck::new()).run();

    if report.failed > 0 {
        assert_eq!(report.exit_code(), 1);
    } else if report.warned > 0 {
        assert_eq!(report.exit_code(), 2);
    } else {
        assert_eq!(report.exit_code(), 0);
    }
}

#[test]
fn test_format_report_mentions_every_check() {
    let report = HealthRunner::new()
        .add_check(SceneCheck::new())
        .add_check(BuildInfoCheck::new())
        .run();

    let formatted = health::format_report(&report);
    assert!(formatted.contains("Scene"));
    assert!(formatted.contains("Build Info"));
    assert!(formatted.contains("Summary"));
}
