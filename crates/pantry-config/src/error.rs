use thiserror::Error;

/// Failure to produce a usable [`crate::PantryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `PANTRY_*` variable could not be parsed into the config.
    #[error("failed to load pantry config: {0}")]
    Figment(#[from] figment::Error),

    /// A section the caller depends on (e.g. `yummly`) lacks credentials.
    #[error("[{section}] is missing required credentials")]
    NotConfigured { section: String },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_configured_names_section() {
        let err = ConfigError::NotConfigured {
            section: "yummly".into(),
        };
        assert_eq!(
            err.to_string(),
            "[yummly] is missing required credentials"
        );
    }

    #[test]
    fn invalid_value_names_field() {
        let err = ConfigError::InvalidValue {
            field: "server.port".into(),
            reason: "must be non-zero".into(),
        };
        assert_eq!(err.to_string(), "invalid server.port: must be non-zero");
    }
}
