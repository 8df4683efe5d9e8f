//! Line-oriented terminal report

use crate::auditor::AuditListener;
use crate::models::{AuditResult, CheckKind, CheckOutcome};
use colored::Colorize;

/// Writes report lines as audit events arrive
pub struct ConsoleReporter {
    echo: bool,
    lines: Vec<String>,
}

impl ConsoleReporter {
    /// Reporter that prints every line to stdout
    pub fn stdout() -> Self {
        Self {
            echo: true,
            lines: Vec::new(),
        }
    }

    /// Reporter that only keeps the lines
    pub fn silent() -> Self {
        Self {
            echo: false,
            lines: Vec::new(),
        }
    }

    /// Lines emitted so far, without color
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn emit(&mut self, line: String) {
        if self.echo {
            if line.starts_with('✓') || line.starts_with("PASSED") {
                println!("{}", line.green());
            } else if line.starts_with('✗')
                || line.starts_with("FAILED")
                || line.starts_with("Error")
            {
                println!("{}", line.red());
            } else {
                println!("{line}");
            }
        }
        self.lines.push(line);
    }
}

impl AuditListener for ConsoleReporter {
    fn started(&mut self, target: &str) {
        self.emit(format!("Testing {target}"));
        self.emit(String::new());
    }

    fn checked(&mut self, check: &CheckOutcome) {
        if check.kind == CheckKind::Disclosure {
            self.emit(String::new());
        }
        self.emit(check_line(check));
    }

    fn completed(&mut self, result: &AuditResult) {
        let total = result.total_checks();
        self.emit(String::new());
        self.emit("=".repeat(60));
        self.emit(format!("PASSED: {}/{}", result.present.len(), total));
        self.emit(format!("FAILED: {}/{}", result.missing.len(), total));
    }

    fn failed(&mut self, target: &str, message: &str) {
        self.emit(format!("Error testing {target}: {message}"));
    }
}

fn check_line(check: &CheckOutcome) -> String {
    let value = check.value.as_deref().unwrap_or_default();
    match (check.kind, check.passed) {
        (CheckKind::Required, true) => format!("✓ {}: {}", check.header, value),
        (CheckKind::Required, false) => {
            format!("✗ MISSING: {} ({})", check.header, check.description)
        }
        (CheckKind::Disclosure, true) => format!("✓ {} header removed (good)", check.header),
        (CheckKind::Disclosure, false) => {
            format!("✗ {}: {} (should be removed)", check.header, value)
        }
    }
}
