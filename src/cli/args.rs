//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "tokcredit")]
#[command(about = "Token usage and credit breakdown for a single model call", version)]
pub(crate) struct Cli {
    /// Usage JSON file (reads stdin when omitted or "-")
    #[arg(value_name = "USAGE_FILE")]
    pub(crate) usage: Option<PathBuf>,

    /// Pricing table JSON applied directly (overrides catalog lookup)
    #[arg(short, long, value_name = "FILE")]
    pub(crate) pricing: Option<PathBuf>,

    /// Model catalog JSON (model id -> pricing)
    #[arg(long, value_name = "FILE")]
    pub(crate) catalog: Option<PathBuf>,

    /// Model id to look up in the catalog
    #[arg(short, long, value_name = "ID")]
    pub(crate) model: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Compact output (credit column only, short labels)
    #[arg(short = 'c', long)]
    pub(crate) compact: bool,

    /// Locale for number formatting (e.g., "en", "zh", "de")
    #[arg(long, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Enable debug output (show pricing resolution details)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Config file the defaults came from
    #[arg(skip)]
    pub(crate) config_path: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }
        // Config pricing only applies when no catalog lookup was asked for
        if self.pricing.is_none() && self.catalog.is_none() && self.model.is_none() {
            self.pricing = config.pricing.clone();
        }
        if self.catalog.is_none() {
            self.catalog = config.catalog.clone();
        }
        self.config_path = config.loaded_from.clone();

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Usage input path, `None` for stdin
    pub(crate) fn usage_path(&self) -> Option<&PathBuf> {
        self.usage
            .as_ref()
            .filter(|p| p.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tokcredit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.usage.is_none());
        assert!(!cli.json);
        assert_eq!(cli.color, ColorMode::Auto);
        assert!(cli.usage_path().is_none());
    }

    #[test]
    fn dash_means_stdin() {
        let cli = parse(&["-"]);
        assert!(cli.usage_path().is_none());
        let cli = parse(&["usage.json"]);
        assert_eq!(cli.usage_path(), Some(&PathBuf::from("usage.json")));
    }

    #[test]
    fn short_flags() {
        let cli = parse(&["-j", "-c", "-m", "gpt-4o", "-p", "p.json"]);
        assert!(cli.json);
        assert!(cli.compact);
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.pricing, Some(PathBuf::from("p.json")));
    }

    #[test]
    fn no_color_overrides_always() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
        let cli = parse(&["--color", "always"]);
        assert!(cli.use_color());
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            compact: true,
            color: Some(ConfigColorMode::Never),
            locale: Some("de".to_string()),
            catalog: Some(PathBuf::from("models.json")),
            ..Default::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert!(cli.compact);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert_eq!(cli.catalog, Some(PathBuf::from("models.json")));
    }

    #[test]
    fn cli_wins_over_config() {
        let config = Config {
            color: Some(ConfigColorMode::Never),
            locale: Some("de".to_string()),
            pricing: Some(PathBuf::from("config-pricing.json")),
            ..Default::default()
        };
        let cli = parse(&["--color", "always", "--locale", "fr", "-p", "cli.json"])
            .with_config(&config);
        assert_eq!(cli.color, ColorMode::Always);
        assert_eq!(cli.locale.as_deref(), Some("fr"));
        assert_eq!(cli.pricing, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn config_pricing_fills_in_when_no_catalog_lookup_requested() {
        let config = Config {
            pricing: Some(PathBuf::from("config-pricing.json")),
            catalog: Some(PathBuf::from("models.json")),
            ..Default::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.pricing, Some(PathBuf::from("config-pricing.json")));
    }

    #[test]
    fn cli_catalog_or_model_suppresses_config_pricing() {
        let config = Config {
            pricing: Some(PathBuf::from("config-pricing.json")),
            ..Default::default()
        };

        let cli = parse(&["--catalog", "models.json", "-m", "m1"]).with_config(&config);
        assert!(cli.pricing.is_none());
        assert_eq!(cli.catalog, Some(PathBuf::from("models.json")));

        let cli = parse(&["-m", "m1"]).with_config(&config);
        assert!(cli.pricing.is_none());

        let cli = parse(&["--catalog", "models.json"]).with_config(&config);
        assert!(cli.pricing.is_none());
    }

    #[test]
    fn config_source_path_carried_over() {
        let config = Config {
            loaded_from: Some(PathBuf::from("/home/u/.tokcredit.toml")),
            ..Default::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.config_path, Some(PathBuf::from("/home/u/.tokcredit.toml")));
    }
}
