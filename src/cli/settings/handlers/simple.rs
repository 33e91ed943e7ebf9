//! Simple setting handlers for single-value settings.

use tracing_subscriber::EnvFilter;

use crate::cli::settings::error::SettingError;
use crate::cli::settings::helpers::{format_optional, success_set, success_unset};
use crate::cli::settings::SettingHandler;
use crate::core::config::data::Config;
use crate::core::responder::webhook::parse_endpoint;
use crate::core::responder::{ResponderKind, ResponderSetupError};
use crate::logging::DEFAULT_LOG_LEVEL;

/// Handler for the `endpoint` setting.
pub struct EndpointHandler;

impl SettingHandler for EndpointHandler {
    fn key(&self) -> &'static str {
        "endpoint"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let [endpoint] = args else {
            return Err(SettingError::MissingArgs {
                hint: "To set the webhook endpoint, specify a single http(s) URL:",
                example: "insight-scout set endpoint https://hooks.example.com/insights",
            });
        };

        let url = parse_endpoint(endpoint).map_err(|err| {
            let reason = match err {
                ResponderSetupError::InvalidEndpoint { reason, .. } => reason,
                other => other.to_string(),
            };
            SettingError::InvalidValue {
                key: "endpoint",
                input: endpoint.clone(),
                reason,
            }
        })?;

        let value = url.to_string();
        let message = success_set("endpoint", &value);
        config.endpoint = Some(value);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.endpoint = None;
        Ok(success_unset("endpoint"))
    }

    fn format(&self, config: &Config) -> String {
        format_optional("endpoint", config.endpoint.as_deref(), None)
    }
}

/// Handler for the `responder` setting.
pub struct ResponderHandler;

impl SettingHandler for ResponderHandler {
    fn key(&self) -> &'static str {
        "responder"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To choose how replies are produced, specify webhook or simulated:",
                example: "insight-scout set responder simulated",
            });
        }

        let input = args.join(" ");
        let kind: ResponderKind = input.parse().map_err(|reason| SettingError::InvalidValue {
            key: "responder",
            input: input.clone(),
            reason,
        })?;

        config.responder = Some(kind);
        Ok(success_set("responder", kind.as_str()))
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.responder = None;
        Ok(format!(
            "{} (webhook when an endpoint is set, otherwise simulated)",
            success_unset("responder")
        ))
    }

    fn format(&self, config: &Config) -> String {
        format_optional(
            "responder",
            config.responder.map(ResponderKind::as_str),
            Some("auto"),
        )
    }
}

/// Handler for the `log-level` setting.
pub struct LogLevelHandler;

impl SettingHandler for LogLevelHandler {
    fn key(&self) -> &'static str {
        "log-level"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        if args.is_empty() {
            return Err(SettingError::MissingArgs {
                hint: "To set the diagnostic log level, specify a level or filter directive:",
                example: "insight-scout set log-level info",
            });
        }

        let directive = args.join(",");
        EnvFilter::try_new(&directive).map_err(|err| SettingError::InvalidValue {
            key: "log-level",
            input: directive.clone(),
            reason: err.to_string(),
        })?;

        let message = success_set("log-level", &directive);
        config.log_level = Some(directive);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.log_level = None;
        Ok(format!(
            "{} (will use default: {DEFAULT_LOG_LEVEL})",
            success_unset("log-level")
        ))
    }

    fn format(&self, config: &Config) -> String {
        format_optional(
            "log-level",
            config.log_level.as_deref(),
            Some(DEFAULT_LOG_LEVEL),
        )
    }
}
