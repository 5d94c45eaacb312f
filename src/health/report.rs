//! Running checks and formatting the results

use std::time::Instant;

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::{CheckResult, CheckStatus, HealthCheck};

/// Results from running a health check suite
#[derive(Debug)]
pub struct HealthReport {
    /// Individual check results with their subsystem names
    pub results: Vec<(String, CheckResult)>,
    /// Total number of checks run
    pub total: usize,
    /// Number of passing checks
    pub passed: usize,
    /// Number of checks with warnings
    pub warned: usize,
    /// Number of failing checks
    pub failed: usize,
}

impl HealthReport {
    /// Returns true if all checks passed (no failures)
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    /// Returns true if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Returns the appropriate exit code for this report
    /// 0 = all pass, 1 = any fail, 2 = any warn (but no fail)
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else if self.warned > 0 {
            2
        } else {
            0
        }
    }
}

/// Orchestrates running health checks and collecting results
pub struct HealthRunner {
    checks: Vec<Box<dyn HealthCheck>>,
}

impl HealthRunner {
    /// Creates a new runner with no checks
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Adds a check to the runner
    pub fn add_check<C: HealthCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs all registered checks and returns a report
    pub fn run(self) -> HealthReport {
        let mut results = Vec::new();
        let mut passed = 0;
        let mut warned = 0;
        let mut failed = 0;

        for check in self.checks {
            let name = check.name().to_string();
            let start = Instant::now();
            let mut result = check.check();
            result.duration = start.elapsed();

            match result.status {
                CheckStatus::Pass => passed += 1,
                CheckStatus::Warn => warned += 1,
                CheckStatus::Fail => failed += 1,
            }

            results.push((name, result));
        }

        let total = results.len();

        HealthReport {
            results,
            total,
            passed,
            warned,
            failed,
        }
    }
}

impl Default for HealthRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a health check report as a pretty table
pub fn format_report(report: &HealthReport) -> String {
    let mut builder = Builder::default();

    builder.push_record(["System", "Status", "Duration", "Message"]);

    for (name, result) in &report.results {
        let duration_str = format!("{:.2?}", result.duration);
        builder.push_record([
            name.as_str(),
            &result.status.as_colored_str(),
            &duration_str,
            &result.message,
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    let mut output = String::new();
    output.push_str(&table.to_string());
    output.push('\n');
    output.push_str(&format_summary(report));

    output
}

/// Formats the summary section of the report
fn format_summary(report: &HealthReport) -> String {
    let mut summary = String::new();

    summary.push_str(&format!("\n{}\n", "Summary".bold().underline()));
    summary.push_str(&format!("  Total checks: {}\n", report.total));
    summary.push_str(&format!("  {} Passed: {}\n", "✓".green(), report.passed));

    if report.warned > 0 {
        summary.push_str(&format!("  {} Warned: {}\n", "⚠".yellow(), report.warned));
    }

    if report.failed > 0 {
        summary.push_str(&format!("  {} Failed: {}\n", "✗".red(), report.failed));
    }

    summary.push('\n');
    if report.is_healthy() {
        if report.has_warnings() {
            summary.push_str(&format!(
                "  {}\n",
                "Overall: HEALTHY (with warnings)".yellow().bold()
            ));
        } else {
            summary.push_str(&format!("  {}\n", "Overall: HEALTHY".green().bold()));
        }
    } else {
        summary.push_str(&format!("  {}\n", "Overall: UNHEALTHY".red().bold()));
    }

    summary
}

/// Prints a health check report to stdout
pub fn print_report(report: &HealthReport) {
    println!("{}", format_report(report));

    for (name, result) in &report.results {
        if let Some(details) = &result.details {
            println!("\n{} Details:", name.bold());
            println!("{}", details);
        }
    }
}
