// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Project configuration parsing.
//!
//! Parses the optional `claves.toml` that sits next to the checked sources
//! and merges it with command-line flags into the effective [`Settings`].

use camino::Utf8Path;
use claves_core::source_analysis::Locale;
use miette::{Context, IntoDiagnostic, Result};
use serde::Deserialize;
use std::fs;

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "claves.toml";

/// The top-level structure parsed from `claves.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClavesConfig {
    /// The `[report]` section.
    #[serde(default)]
    pub report: ReportConfig,
    /// The `[source]` section.
    #[serde(default)]
    pub source: SourceConfig,
}

/// How diagnostics are reported.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// `"es"` or `"en"`.
    pub locale: Option<String>,
    /// Output format.
    pub format: Option<OutputFormat>,
}

/// How source text is prepared before lexing.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Turn CRLF line endings into LF before lexing.
    #[serde(default = "default_normalize_line_endings")]
    pub normalize_line_endings: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            normalize_line_endings: default_normalize_line_endings(),
        }
    }
}

const fn default_normalize_line_endings() -> bool {
    true
}

/// Output format for tokens and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One rendered line per diagnostic (default).
    #[default]
    Plain,
    /// miette reports with source snippets.
    Fancy,
    /// Machine-readable JSON (one object per line).
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "fancy" => Ok(Self::Fancy),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}': expected 'plain', 'fancy' or 'json'"
            )),
        }
    }
}

/// The effective settings for one command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Language of rendered diagnostics.
    pub locale: Locale,
    /// Output format.
    pub format: OutputFormat,
    /// Turn CRLF into LF before lexing.
    pub normalize_line_endings: bool,
}

impl Settings {
    /// Merges command-line flags over an optional config file.
    pub fn resolve(
        config: Option<ClavesConfig>,
        format: Option<OutputFormat>,
        locale: Option<Locale>,
    ) -> Result<Self> {
        let config = config.unwrap_or_default();
        let config_locale = config
            .report
            .locale
            .as_deref()
            .map(str::parse::<Locale>)
            .transpose()
            .map_err(|e| miette::miette!("Invalid [report] locale in {CONFIG_FILE}: {e}"))?;

        Ok(Self {
            locale: locale.or(config_locale).unwrap_or_default(),
            format: format.or(config.report.format).unwrap_or_default(),
            normalize_line_endings: config.source.normalize_line_endings,
        })
    }

    /// Applies the source settings to freshly read text.
    #[must_use]
    pub fn prepare_source(&self, source: String) -> String {
        if self.normalize_line_endings && source.contains('\r') {
            source.replace("\r\n", "\n")
        } else {
            source
        }
    }
}

/// Parse a `claves.toml` file.
///
/// Returns an error if the file cannot be read or contains invalid TOML.
pub fn parse_config(path: &Utf8Path) -> Result<ClavesConfig> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read config '{path}'"))?;

    toml::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse config '{path}'"))
}

/// Look for `claves.toml` in the given directory and parse it if found.
///
/// Returns `None` if no config file exists. Returns an error if the file
/// exists but is malformed.
pub fn find_config(dir: &Utf8Path) -> Result<Option<ClavesConfig>> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path
        .try_exists()
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to stat config '{config_path}'"))?
    {
        tracing::debug!(path = %config_path, "loading config");
        parse_config(&config_path).map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        fs::write(path.join(CONFIG_FILE), content).unwrap();
        path
    }

    #[test]
    fn test_parse_full_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
[report]
locale = "en"
format = "json"

[source]
normalize_line_endings = false
"#,
        );

        let config = parse_config(&path.join(CONFIG_FILE)).unwrap();
        assert_eq!(config.report.locale.as_deref(), Some("en"));
        assert_eq!(config.report.format, Some(OutputFormat::Json));
        assert!(!config.source.normalize_line_endings);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "");

        let config = parse_config(&path.join(CONFIG_FILE)).unwrap();
        assert!(config.report.locale.is_none());
        assert!(config.report.format.is_none());
        assert!(config.source.normalize_line_endings);
    }

    #[test]
    fn test_parse_config_unknown_format() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[report]\nformat = \"xml\"\n");

        let err = parse_config(&path.join(CONFIG_FILE)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_parse_config_unknown_key() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[report]\ncolour = true\n");

        assert!(parse_config(&path.join(CONFIG_FILE)).is_err());
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        assert!(find_config(&path).unwrap().is_none());
    }

    #[test]
    fn test_find_config_present() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[report]\nlocale = \"en\"\n");
        let config = find_config(&path).unwrap().unwrap();
        assert_eq!(config.report.locale.as_deref(), Some("en"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = ClavesConfig {
            report: ReportConfig {
                locale: Some("en".to_string()),
                format: Some(OutputFormat::Json),
            },
            source: SourceConfig::default(),
        };
        let settings =
            Settings::resolve(Some(config), Some(OutputFormat::Fancy), Some(Locale::Es)).unwrap();
        assert_eq!(settings.format, OutputFormat::Fancy);
        assert_eq!(settings.locale, Locale::Es);
    }

    #[test]
    fn test_config_applies_without_flags() {
        let config = ClavesConfig {
            report: ReportConfig {
                locale: Some("en".to_string()),
                format: None,
            },
            source: SourceConfig::default(),
        };
        let settings = Settings::resolve(Some(config), None, None).unwrap();
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.format, OutputFormat::Plain);
        assert!(settings.normalize_line_endings);
    }

    #[test]
    fn test_invalid_config_locale() {
        let config = ClavesConfig {
            report: ReportConfig {
                locale: Some("fr".to_string()),
                format: None,
            },
            source: SourceConfig::default(),
        };
        let err = Settings::resolve(Some(config), None, None).unwrap_err();
        assert!(err.to_string().contains("locale"));
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = Settings::resolve(None, None, None).unwrap();
        assert_eq!(settings, Settings {
            locale: Locale::Es,
            format: OutputFormat::Plain,
            normalize_line_endings: true,
        });
    }

    #[test]
    fn test_prepare_source_normalizes_crlf() {
        let settings = Settings::resolve(None, None, None).unwrap();
        assert_eq!(settings.prepare_source("a\r\nb".to_string()), "a\nb");

        let keep = Settings {
            normalize_line_endings: false,
            ..settings
        };
        assert_eq!(keep.prepare_source("a\r\nb".to_string()), "a\r\nb");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
        assert_eq!("fancy".parse::<OutputFormat>(), Ok(OutputFormat::Fancy));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
