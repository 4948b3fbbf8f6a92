use std::env;
use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;

use crate::cli::Cli;
use echochat_chat::{ParseResponderError, ResponderKind};

pub const COLOR_ENV: &str = "ECHOCHAT_COLOR";
pub const RESPONDER_ENV: &str = "ECHOCHAT_RESPONDER";
pub const VERBOSE_ENV: &str = "ECHOCHAT_VERBOSE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {source}")]
    Color {
        var: &'static str,
        #[source]
        source: ParseColorError,
    },

    #[error("invalid {var}: {source}")]
    Responder {
        var: &'static str,
        #[source]
        source: ParseResponderError,
    },

    #[error("invalid {var}: '{value}' is not a boolean")]
    Flag { var: &'static str, value: String },
}

/// When to paint entries with their background color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color mode '{0}' (expected 'auto', 'always' or 'never')")]
pub struct ParseColorError(pub String);

impl FromStr for ColorChoice {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" | "on" => Ok(ColorChoice::Always),
            "never" | "off" => Ok(ColorChoice::Never),
            other => Err(ParseColorError(other.to_string())),
        }
    }
}

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub color: bool,
    pub responder: ResponderKind,
    pub verbose: bool,
}

impl AppConfig {
    /// Precedence: CLI flags > ECHOCHAT_* env > defaults
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let color_choice = match cli.color {
            Some(choice) => choice,
            None => color_from_env()?.unwrap_or_default(),
        };

        let responder = match cli.responder {
            Some(kind) => kind,
            None => responder_from_env()?.unwrap_or_default(),
        };

        let verbose = cli.verbose || verbose_from_env()?.unwrap_or(false);

        Ok(Self {
            color: resolve_color(color_choice),
            responder,
            verbose,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: false,
            responder: ResponderKind::default(),
            verbose: false,
        }
    }
}

fn color_from_env() -> Result<Option<ColorChoice>, ConfigError> {
    env_value(COLOR_ENV)
        .map(|value| {
            value.parse().map_err(|source| ConfigError::Color {
                var: COLOR_ENV,
                source,
            })
        })
        .transpose()
}

fn responder_from_env() -> Result<Option<ResponderKind>, ConfigError> {
    env_value(RESPONDER_ENV)
        .map(|value| {
            value.parse().map_err(|source| ConfigError::Responder {
                var: RESPONDER_ENV,
                source,
            })
        })
        .transpose()
}

fn verbose_from_env() -> Result<Option<bool>, ConfigError> {
    env_value(VERBOSE_ENV)
        .map(|value| match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Flag {
                var: VERBOSE_ENV,
                value,
            }),
        })
        .transpose()
}

/// Non-empty value of an environment variable
fn env_value(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Auto means color only on a terminal and only when NO_COLOR is unset
fn resolve_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(COLOR_ENV);
        env::remove_var(RESPONDER_ENV);
        env::remove_var(VERBOSE_ENV);
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("echochat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_color_choice_parse() {
        assert_eq!("AUTO".parse::<ColorChoice>().unwrap(), ColorChoice::Auto);
        assert_eq!("off".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert!("purple".parse::<ColorChoice>().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let config = AppConfig::from_cli(&parse(&["--color", "never"])).unwrap();
        assert_eq!(
            config,
            AppConfig {
                color: false,
                responder: ResponderKind::Echo,
                verbose: false,
            }
        );
    }

    #[test]
    #[serial]
    fn test_env_fills_missing_flags() {
        clear_env();
        env::set_var(COLOR_ENV, "always");
        env::set_var(RESPONDER_ENV, "pending-model");
        env::set_var(VERBOSE_ENV, "yes");

        let config = AppConfig::from_cli(&parse(&[])).unwrap();
        assert!(config.color);
        assert_eq!(config.responder, ResponderKind::PendingModel);
        assert!(config.verbose);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_flags_override_env() {
        clear_env();
        env::set_var(COLOR_ENV, "always");
        env::set_var(RESPONDER_ENV, "pending-model");

        let config = AppConfig::from_cli(&parse(&["--color", "never", "--responder", "echo"])).unwrap();
        assert!(!config.color);
        assert_eq!(config.responder, ResponderKind::Echo);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_is_reported() {
        clear_env();
        env::set_var(COLOR_ENV, "purple");

        let err = AppConfig::from_cli(&parse(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Color { var: COLOR_ENV, .. }));
        assert!(err.to_string().contains("purple"));

        clear_env();
        env::set_var(VERBOSE_ENV, "maybe");
        let err = AppConfig::from_cli(&parse(&["--color", "never"])).unwrap_err();
        assert!(matches!(err, ConfigError::Flag { .. }));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_env_is_ignored() {
        clear_env();
        env::set_var(RESPONDER_ENV, "  ");

        let config = AppConfig::from_cli(&parse(&["--color", "never"])).unwrap();
        assert_eq!(config.responder, ResponderKind::Echo);

        clear_env();
    }
}
