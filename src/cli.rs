//! Command-line interface
//!
//! Each subcommand returns its output lines so the binary only has to print
//! them.

use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::version::{ParseMode, ParseOptions, Version, VersionError, VersionParser, compare};

#[derive(Debug, Parser)]
#[command(name = "loosever")]
#[command(
    version,
    about = "Parse, compare and classify loosely structured version strings"
)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Require integer major, minor and patch components
    #[arg(long, global = true)]
    pub strict: bool,

    /// Treat `-text` after the patch number as the suffix
    #[arg(long, global = true)]
    pub split_hyphen_suffix: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical form of each version
    Parse {
        #[arg(required = true)]
        versions: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print -1, 0 or 1 as LEFT is lower, equal or higher than RIGHT
    Compare { left: String, right: String },
    /// Print the most significant boundary crossed going from FROM to TO
    Upgrade {
        from: String,
        to: String,
        /// Print all boundary flags as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print versions in ascending order
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
        #[arg(long)]
        reverse: bool,
    },
}

impl Cli {
    /// Merge command-line flags over the config file's parse options
    pub fn parse_options(&self, config: &Config) -> ParseOptions {
        let mut options = config.parse;
        if self.strict {
            options.mode = ParseMode::Strict;
        }
        if self.split_hyphen_suffix {
            options.split_hyphen_suffix = true;
        }
        options
    }
}

/// Run a subcommand and return the lines to print
pub fn execute(command: &Command, parser: &VersionParser) -> anyhow::Result<Vec<String>> {
    debug!("Executing {:?} with {:?}", command, parser.options());

    match command {
        Command::Parse { versions, json } => versions
            .iter()
            .map(|text| -> anyhow::Result<String> {
                let version = parse_arg(parser, text)?;
                Ok(if *json {
                    String::from_utf8_lossy(&version.to_json()).into_owned()
                } else {
                    version.to_string()
                })
            })
            .collect(),
        Command::Compare { left, right } => {
            let left = parse_arg(parser, left)?;
            let right = parse_arg(parser, right)?;
            let ordering = compare(&left, &right)?;
            Ok(vec![(ordering as i32).to_string()])
        }
        Command::Upgrade { from, to, json } => {
            let from = parse_arg(parser, from)?;
            let to = parse_arg(parser, to)?;
            let kind = from.upgrade_kind(&to)?;
            let line = if *json {
                serde_json::to_string(&kind)?
            } else {
                kind.boundary()
                    .map_or("none", |component| component.as_str())
                    .to_string()
            };
            Ok(vec![line])
        }
        Command::Sort { versions, reverse } => {
            let mut parsed = versions
                .iter()
                .map(|text| parse_arg(parser, text).map(|version| (text.as_str(), version)))
                .collect::<anyhow::Result<Vec<_>>>()?;
            sort_versions(&mut parsed)?;
            if *reverse {
                parsed.reverse();
            }
            Ok(parsed.into_iter().map(|(text, _)| text.to_string()).collect())
        }
    }
}

fn parse_arg(parser: &VersionParser, text: &str) -> anyhow::Result<Version> {
    parser
        .parse(text)
        .with_context(|| format!("Failed to parse version {text:?}"))
}

/// Stable sort by version order, failing on the first invalid component
fn sort_versions(versions: &mut [(&str, Version)]) -> Result<(), VersionError> {
    for (_, version) in versions.iter() {
        compare(version, version)?;
    }
    // Every component splits, so comparison cannot fail from here on.
    versions.sort_by(|(_, a), (_, b)| compare(a, b).unwrap_or(Ordering::Equal));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run(args: &[&str]) -> anyhow::Result<Vec<String>> {
        let cli = Cli::try_parse_from(args)?;
        let parser = VersionParser::new(cli.parse_options(&Config::default()));
        execute(&cli.command, &parser)
    }

    #[rstest]
    #[case(&["loosever", "parse", "1.2.3"], &["v1.2.3"])]
    #[case(&["loosever", "parse", "v1.2", "1.2.3.rc1"], &["v1.2", "v1.2.3rc1"])]
    #[case(&["loosever", "parse", "--json", "v1.2"], &[r#"{"major":"1","minor":"2"}"#])]
    #[case(&["loosever", "compare", "v1.1.1", "v1.2.0"], &["-1"])]
    #[case(&["loosever", "compare", "v1.2.0", "v1.1.1"], &["1"])]
    #[case(&["loosever", "compare", "v1.2", "1.2.0"], &["0"])]
    #[case(&["loosever", "upgrade", "v1.1.1", "v1.2.0"], &["minor"])]
    #[case(&["loosever", "upgrade", "v1.2.0", "v1.1.1"], &["none"])]
    #[case(
        &["loosever", "upgrade", "--json", "v1.1.1", "v1.2.0"],
        &[r#"{"major":false,"minor":true,"patch":true,"suffix":true}"#]
    )]
    #[case(
        &["loosever", "sort", "v1.10.0", "v1.2.0", "1.9"],
        &["v1.2.0", "1.9", "v1.10.0"]
    )]
    #[case(
        &["loosever", "sort", "--reverse", "v1.10.0", "v1.2.0", "1.9"],
        &["v1.10.0", "1.9", "v1.2.0"]
    )]
    #[case(
        &["loosever", "--split-hyphen-suffix", "parse", "--json", "1.2.3-rc1"],
        &[r#"{"major":"1","minor":"2","patch":"3","suffix":"-rc1"}"#]
    )]
    fn execute_prints_expected_lines(#[case] args: &[&str], #[case] expected: &[&str]) {
        assert_eq!(run(args).unwrap(), expected);
    }

    #[test]
    fn execute_reports_invalid_version() {
        let error = run(&["loosever", "parse", "v"]).unwrap_err();

        assert!(error.to_string().contains("Failed to parse version"));
        assert!(matches!(
            error.downcast_ref::<VersionError>(),
            Some(VersionError::InvalidVersion(_))
        ));
    }

    #[test]
    fn strict_flag_rejects_mixed_components() {
        let result = run(&["loosever", "--strict", "parse", "vA1.2.3"]);

        assert!(result.is_err());
    }

    #[test]
    fn sort_reports_invalid_component() {
        let result = run(&["loosever", "sort", "1.0", "1.99999999999999999999999"]);

        assert!(result.is_err());
    }

    #[test]
    fn sort_reports_invalid_component_within_longer_list() {
        let mut args = vec!["loosever".to_string(), "sort".to_string()];
        for i in 0..200 {
            args.push(format!("1.{}", 199 - i));
            if i % 50 == 0 {
                args.push("1.0.99999999999999999999999".to_string());
            }
        }
        let cli = Cli::try_parse_from(&args).unwrap();
        let parser = VersionParser::default();

        let error = execute(&cli.command, &parser).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<VersionError>(),
            Some(VersionError::InvalidComponent(_))
        ));
    }

    #[test]
    fn strict_flag_keeps_signed_integers() {
        assert_eq!(
            run(&["loosever", "--strict", "parse", "+1.-2.03"]).unwrap(),
            &["v1.-2.3"]
        );
    }

    #[test]
    fn parse_options_override_config() {
        let cli = Cli::try_parse_from(["loosever", "--strict", "compare", "1.0", "1.1"]).unwrap();
        let config = Config::default();

        let options = cli.parse_options(&config);

        assert_eq!(options.mode, ParseMode::Strict);
        assert!(!options.split_hyphen_suffix);
    }
}
