//! Configuration management for the header auditor

use crate::error::{AuditError, Result};
use crate::models::AuditConfig;
use serde::Deserialize;
use std::path::Path;

/// File-based configuration structure
#[derive(Debug, Deserialize)]
struct FileConfig {
    audit: Option<AuditSection>,
}

#[derive(Debug, Deserialize)]
struct AuditSection {
    target: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

/// Loads configuration from a TOML file and merges with defaults
pub fn load_config(path: &Path) -> Result<AuditConfig> {
    let content = std::fs::read_to_string(path).map_err(AuditError::IoError)?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Result<AuditConfig> {
    let file_config: FileConfig = toml::from_str(content)?;

    let mut config = AuditConfig::default();

    if let Some(audit) = file_config.audit {
        if let Some(target) = audit.target {
            config.target = target;
        }
        if let Some(timeout) = audit.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(ua) = audit.user_agent {
            config.user_agent = ua;
        }
    }

    validate(&config)?;
    Ok(config)
}

/// Merges CLI arguments into an existing AuditConfig
pub fn merge_cli_args(
    config: &mut AuditConfig,
    target: Option<String>,
    timeout: Option<u64>,
) -> Result<()> {
    if let Some(t) = target {
        config.target = t;
    }
    if let Some(t) = timeout {
        config.timeout_secs = t;
    }
    validate(config)
}

fn validate(config: &AuditConfig) -> Result<()> {
    if config.timeout_secs == 0 {
        return Err(AuditError::ConfigError(
            "timeout_secs must be greater than zero".to_string(),
        ));
    }
    if config.target.trim().is_empty() {
        return Err(AuditError::ConfigError("target must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_TARGET, DEFAULT_TIMEOUT_SECS};

    #[test]
    fn test_empty_file_keeps_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.target, DEFAULT_TARGET);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_partial_section_overrides_only_given_keys() {
        let config = parse_config(
            r#"
            [audit]
            timeout_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.target, DEFAULT_TARGET);
        assert_eq!(config.timeout_secs, 3);
        assert!(config.user_agent.starts_with("header-audit/"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = parse_config("[audit]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, AuditError::ConfigError(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_config("[audit\ntarget = ").unwrap_err();
        assert!(matches!(err, AuditError::TomlError(_)));
    }

    #[test]
    fn test_cli_args_win() {
        let mut config = AuditConfig::default();
        merge_cli_args(&mut config, Some("http://localhost:8080".to_string()), None).unwrap();
        assert_eq!(config.target, "http://localhost:8080");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
