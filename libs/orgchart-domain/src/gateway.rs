//! Shared gateway rules
//!
//! Both entity gateways validate names the same way before anything reaches
//! storage. A rejected name is not an error: create reports "nothing created"
//! and update reports "nothing updated".

/// Configuration for the entity gateways
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Maximum allowed name length in characters (default: 255)
    pub max_name_length: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            max_name_length: 255,
        }
    }
}

impl GatewayConfig {
    /// Normalize a name for storage
    ///
    /// Returns the trimmed name, or `None` when it is blank or too long.
    pub fn normalize_name<'a>(&self, name: &'a str) -> Option<&'a str> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.chars().count() > self.max_name_length {
            return None;
        }
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        let config = GatewayConfig::default();
        assert_eq!(config.normalize_name("  Sales "), Some("Sales"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = GatewayConfig::default();
        assert_eq!(config.normalize_name(""), None);
        assert_eq!(config.normalize_name("   \t"), None);
    }

    #[test]
    fn test_name_length_limit_counts_chars() {
        let config = GatewayConfig { max_name_length: 3 };
        assert_eq!(config.normalize_name("Ops"), Some("Ops"));
        assert_eq!(config.normalize_name("Über"), None);
        assert_eq!(config.normalize_name("Öl"), Some("Öl"));
    }
}
