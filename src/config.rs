use std::env;

use crate::error::ConsoleError;

/// Default flash texts. The deployment this console ships with is
/// Chinese-language; override via the FLASH_* environment variables.
const DEFAULT_SUCCESS_MESSAGE: &str = "日志已成功发送到 MemoryLogMonitor";
const DEFAULT_EMPTY_MESSAGE: &str = "日志内容不能为空";
const DEFAULT_FAILURE_PREFIX: &str = "发送日志失败: ";

#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP server port for the console
    pub http_port: u16,
    /// TCP address of the MemoryLogMonitor receiver. When unset, submitted
    /// lines go to the local tracing sink instead of being forwarded.
    pub monitor_addr: Option<String>,
    /// Flash text shown after a successful dispatch
    pub success_message: String,
    /// Flash text shown when the submitted message is blank
    pub empty_message: String,
    /// Prefix for the flash text shown when dispatch fails
    pub failure_prefix: String,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        validate_port(self.http_port)?;
        if let Some(addr) = &self.monitor_addr {
            validate_addr(addr)?;
        }
        Ok(())
    }
}

/// Validates that the monitor address is not empty and carries a port.
fn validate_addr(addr: &str) -> Result<(), ConsoleError> {
    if addr.trim().is_empty() {
        return Err(ConsoleError::Config(
            "Monitor address cannot be empty".into(),
        ));
    }
    match addr.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => Ok(()),
        _ => Err(ConsoleError::Config(format!(
            "Monitor address must be host:port, got {addr:?}"
        ))),
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ConsoleError> {
    if port == 0 {
        return Err(ConsoleError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn get_configuration() -> Result<Settings, Box<dyn std::error::Error>> {
    let http_port = env_or("HTTP_PORT", "8080").parse::<u16>()?;

    // Unset or empty means no forwarding
    let monitor_addr = env::var("MONITOR_ADDR")
        .ok()
        .filter(|addr| !addr.trim().is_empty());

    let settings = Settings {
        http_port,
        monitor_addr,
        success_message: env_or("FLASH_SUCCESS_MESSAGE", DEFAULT_SUCCESS_MESSAGE),
        empty_message: env_or("FLASH_EMPTY_MESSAGE", DEFAULT_EMPTY_MESSAGE),
        failure_prefix: env_or("FLASH_FAILURE_PREFIX", DEFAULT_FAILURE_PREFIX),
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings() -> Settings {
        Settings {
            http_port: 8080,
            monitor_addr: None,
            success_message: DEFAULT_SUCCESS_MESSAGE.into(),
            empty_message: DEFAULT_EMPTY_MESSAGE.into(),
            failure_prefix: DEFAULT_FAILURE_PREFIX.into(),
        }
    }

    #[test]
    fn test_validate_port_valid() {
        assert!(validate_port(80).is_ok());
        assert!(validate_port(8080).is_ok());
        assert!(validate_port(65535).is_ok());
        assert!(validate_port(1).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let result = validate_port(0);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Port cannot be 0"));
    }

    #[test]
    fn test_validate_addr_valid() {
        assert!(validate_addr("127.0.0.1:9090").is_ok());
        assert!(validate_addr("monitor.example.com:9090").is_ok());
    }

    #[test]
    fn test_validate_addr_missing_port_fails() {
        assert!(validate_addr("127.0.0.1").is_err());
        assert!(validate_addr("monitor:").is_err());
        assert!(validate_addr(":9090").is_err());
    }

    #[test]
    fn test_validate_addr_empty_fails() {
        let result = validate_addr("   ");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_settings_validate_success() {
        assert!(base_settings().validate().is_ok());
    }

    #[test]
    fn test_settings_validate_with_monitor_addr() {
        let settings = Settings {
            monitor_addr: Some("127.0.0.1:9090".into()),
            ..base_settings()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validate_zero_port_fails() {
        let settings = Settings {
            http_port: 0,
            ..base_settings()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validate_bad_monitor_addr_fails() {
        let settings = Settings {
            monitor_addr: Some("not-an-addr".into()),
            ..base_settings()
        };
        assert!(settings.validate().is_err());
    }
}
