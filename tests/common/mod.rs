//! Common test utilities

use header_audit::models::AuditConfig;

/// Creates a test AuditConfig pointing to a wiremock server
pub fn test_config(target: &str) -> AuditConfig {
    AuditConfig {
        target: target.to_string(),
        timeout_secs: 10,
        user_agent: "header-audit-test/0.1.0".to_string(),
    }
}

/// The five required security headers with acceptable values
pub fn secure_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Content-Security-Policy", "default-src 'self'"),
        ("X-Frame-Options", "DENY"),
        ("X-Content-Type-Options", "nosniff"),
        ("X-XSS-Protection", "1"),
        ("Referrer-Policy", "no-referrer"),
    ]
}
