//! Core data models for the header auditor

use chrono::{DateTime, Local};

/// Site audited when no target is given
pub const DEFAULT_TARGET: &str = "https://vibecodeaudit.app";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Header that reveals the server technology and should be stripped
pub const DISCLOSURE_HEADER: &str = "X-Powered-By";

/// Observed values are cut to this many characters in the report
pub const MAX_VALUE_CHARS: usize = 80;

/// A security header the target must send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredHeader {
    pub name: &'static str,
    pub description: &'static str,
}

/// Required headers, in the order they are checked and reported
pub const REQUIRED_HEADERS: [RequiredHeader; 5] = [
    RequiredHeader {
        name: "Content-Security-Policy",
        description: "CSP protection",
    },
    RequiredHeader {
        name: "X-Frame-Options",
        description: "Clickjacking protection",
    },
    RequiredHeader {
        name: "X-Content-Type-Options",
        description: "MIME sniffing protection",
    },
    RequiredHeader {
        name: "X-XSS-Protection",
        description: "XSS protection",
    },
    RequiredHeader {
        name: "Referrer-Policy",
        description: "Referrer policy",
    },
];

/// What a single check was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Header must be present
    Required,
    /// Header must be absent
    Disclosure,
}

/// Outcome of one header check
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub header: String,
    pub description: String,
    pub kind: CheckKind,
    pub passed: bool,
    /// Observed header value, if the header was sent
    pub value: Option<String>,
}

/// Result of auditing one target
#[derive(Debug, Clone)]
pub struct AuditResult {
    /// Target URL
    pub target: String,
    /// Audit start time (local timezone)
    pub started_at: DateTime<Local>,
    /// Audit end time (local timezone)
    pub finished_at: Option<DateTime<Local>>,
    /// Checks in evaluation order, disclosure check last
    pub checks: Vec<CheckOutcome>,
    /// Summary lines of passed checks
    pub present: Vec<String>,
    /// Summary lines of failed checks
    pub missing: Vec<String>,
    /// Set when the request itself failed
    pub error: Option<String>,
}

impl AuditResult {
    /// Creates an empty result for a target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            started_at: Local::now(),
            finished_at: None,
            checks: Vec::new(),
            present: Vec::new(),
            missing: Vec::new(),
            error: None,
        }
    }

    /// Records a check and its summary line
    pub fn record(&mut self, outcome: CheckOutcome, summary: String) {
        if outcome.passed {
            self.present.push(summary);
        } else {
            self.missing.push(summary);
        }
        self.checks.push(outcome);
    }

    /// Marks the audit as failed because the request did not complete
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Number of checks an audit performs: every required header plus the disclosure check
    pub fn total_checks(&self) -> usize {
        REQUIRED_HEADERS.len() + 1
    }

    /// True only if the request completed and no check failed
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.missing.is_empty()
    }

    /// Marks the audit as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Local::now());
    }

    /// Wall-clock time the audit took, once finished
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds())
    }
}

/// Configuration for an audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Target URL to audit
    pub target: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("header-audit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
