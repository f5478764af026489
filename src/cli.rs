use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate, generate_to};

use trendmark::config::TrendOverrides;

// Overflows to negative infinity and passes clap's negative-number check.
const NEGATIVE_INFINITY_ARG: &str = "-1e999";

pub const DEFAULT_HTML_PATH: &str = "data/output/trends.html";
pub const DEFAULT_VALUE_COLUMN: &str = "value";
pub const DEFAULT_LABEL_COLUMN: &str = "label";

pub const INPUT_HELP: &str = "Read values from a CSV file with a header row. Values given as arguments are listed first.";
pub const CONFIG_HELP: &str = "Load classes and suffixes from a JSON file (camelCase keys, e.g. positiveStyle). Flags below override it.";
pub const SAVE_HTML_HELP: &str = "Save an HTML report to the given file (defaults to data/output/trends.html when no path is provided).";
pub const MINIFY_HELP: &str = "Minify the saved HTML report, including its stylesheet.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Coloured table with one row per value.
    #[default]
    Terminal,
    /// One rendered `<span>` fragment per line.
    Html,
}

#[derive(Debug, Parser)]
#[command(
    name = "trendmark",
    about = "Render increase/decrease/neutral trend indicators for numeric values.",
    version = env!("CARGO_PKG_VERSION"),
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[arg(
        value_name = "VALUE",
        allow_negative_numbers = true,
        value_parser = parse_value,
        help = "Values to classify. Accepts integers, decimals, NaN, inf and -inf."
    )]
    pub values: Vec<f64>,
    #[arg(long, value_name = "FILE", help = INPUT_HELP)]
    pub input: Option<PathBuf>,
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VALUE_COLUMN, help = "CSV column holding the values.")]
    pub column: String,
    #[arg(long, value_name = "NAME", default_value = DEFAULT_LABEL_COLUMN, help = "CSV column holding row labels, used when present.")]
    pub label_column: String,
    #[arg(long, value_name = "FILE", help = CONFIG_HELP)]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub overrides: TrendOverrides,
    #[arg(long, value_enum, default_value_t = OutputMode::Terminal, help = "How to print the results.")]
    pub output: OutputMode,
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_HTML_PATH,
        help = SAVE_HTML_HELP
    )]
    pub save_html: Option<PathBuf>,
    #[arg(long, help = MINIFY_HELP)]
    pub minify: bool,
    #[arg(long, help = "Disable coloured terminal output.")]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts, optionally installing them for the current user.
    Completions {
        #[arg(value_enum, help = "Shell to generate completions for.")]
        shell: Shell,
        #[arg(
            long,
            value_name = "DIR",
            help = "Directory to write the completion script to."
        )]
        output_dir: Option<PathBuf>,
        #[arg(
            long,
            help = "Install the completion script into the default location for the selected shell."
        )]
        install: bool,
    },
}

impl Cli {
    /// Parses `args` after rewriting bare `-inf`/`-infinity` tokens, which clap
    /// would otherwise split into short flags.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut command = Cli::command();
    command.build();
    let mut normalized: Vec<OsString> = Vec::new();
    for arg in args {
        let arg = arg.into();
        let rewrite = is_negative_infinity(&arg)
            && !normalized
                .last()
                .is_some_and(|prev| requires_value(&command, prev));
        if rewrite {
            normalized.push(OsString::from(NEGATIVE_INFINITY_ARG));
        } else {
            normalized.push(arg);
        }
    }
    normalized
}

fn is_negative_infinity(arg: &OsStr) -> bool {
    arg.to_str().is_some_and(|arg| {
        arg.eq_ignore_ascii_case("-inf") || arg.eq_ignore_ascii_case("-infinity")
    })
}

fn requires_value(command: &clap::Command, prev: &OsStr) -> bool {
    let Some(long) = prev.to_str().and_then(|prev| prev.strip_prefix("--")) else {
        return false;
    };
    if long.contains('=') {
        return false;
    }
    command
        .get_arguments()
        .find(|arg| arg.get_long() == Some(long))
        .and_then(clap::Arg::get_num_args)
        .is_some_and(|range| range.min_values() > 0)
}

pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Completions {
            shell,
            output_dir,
            install,
        } => generate_completions(shell, output_dir, install),
    }
}

fn generate_completions(shell: Shell, output_dir: Option<PathBuf>, install: bool) -> Result<()> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();

    let target_dir = if let Some(dir) = output_dir {
        Some(dir)
    } else if install {
        Some(default_install_dir(shell)?)
    } else {
        None
    };

    if let Some(dir) = target_dir {
        let path = write_completions(shell, &mut command, bin_name, &dir)?;
        println!("Installed {shell:?} completions to {}", path.display());
    } else {
        let mut stdout = io::stdout().lock();
        generate(shell, &mut command, bin_name, &mut stdout);
        stdout
            .flush()
            .context("failed to flush completion output")?;
    }

    Ok(())
}

fn write_completions(
    shell: Shell,
    command: &mut clap::Command,
    bin_name: String,
    dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create completion directory {}", dir.display()))?;
    generate_to(shell, command, bin_name, dir)
        .with_context(|| format!("failed to write {shell:?} completions to {}", dir.display()))
}

fn parse_value(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("'{raw}' is not a number (expected e.g. 5, -3.2, 1e3, NaN, inf, -inf)"))
}

fn default_install_dir(shell: Shell) -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| {
        anyhow!("HOME environment variable is not set; use --output-dir to specify a path")
    })?;
    let mut path = PathBuf::from(home);

    match shell {
        Shell::Bash => {
            path.push(".local/share/bash-completion/completions");
            Ok(path)
        }
        Shell::Elvish => {
            path.push(".elvish/lib/completions");
            Ok(path)
        }
        Shell::Fish => {
            path.push(".config/fish/completions");
            Ok(path)
        }
        Shell::PowerShell => {
            path.push(".local/share/powershell/Scripts");
            Ok(path)
        }
        Shell::Zsh => {
            path.push(".local/share/zsh/site-functions");
            Ok(path)
        }
        other => Err(anyhow!(
            "no default install location for {other:?}; specify --output-dir"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_values_and_overrides() {
        let cli = Cli::try_parse_from([
            "trendmark",
            "5",
            "-3",
            "0",
            "--positive-style",
            "green",
            "--negative-suffix",
            "",
        ])
        .unwrap();
        assert_eq!(cli.values, vec![5.0, -3.0, 0.0]);
        assert_eq!(cli.overrides.positive_style.as_deref(), Some("green"));
        assert_eq!(cli.overrides.negative_suffix.as_deref(), Some(""));
        assert_eq!(cli.overrides.base_style, None);
        assert_eq!(cli.output, OutputMode::Terminal);
        assert!(cli.save_html.is_none());
    }

    #[test]
    fn negative_infinity_is_a_value() {
        let cli = Cli::parse_args(["trendmark", "-inf"]).unwrap();
        assert_eq!(cli.values, vec![f64::NEG_INFINITY]);

        let cli = Cli::parse_args(["trendmark", "1", "-1e3", "nan", "inf", "-Infinity"]).unwrap();
        assert_eq!(cli.values.len(), 5);
        assert_eq!(cli.values[..2], [1.0, -1000.0]);
        assert!(cli.values[2].is_nan());
        assert_eq!(cli.values[3], f64::INFINITY);
        assert_eq!(cli.values[4], f64::NEG_INFINITY);
    }

    #[test]
    fn flags_still_parse_after_values() {
        let cli = Cli::parse_args(["trendmark", "-inf", "-2", "--output", "html", "--minify"])
            .unwrap();
        assert_eq!(cli.values, vec![f64::NEG_INFINITY, -2.0]);
        assert_eq!(cli.output, OutputMode::Html);
        assert!(cli.minify);

        let cli = Cli::parse_args(["trendmark", "1", "--save-html"]).unwrap();
        assert_eq!(cli.values, vec![1.0]);
        assert!(cli.save_html.is_some());
    }

    #[test]
    fn option_values_keep_literal_inf_text() {
        let cli = Cli::parse_args(["trendmark", "-3", "--negative-suffix", "-inf"]).unwrap();
        assert_eq!(cli.values, vec![-3.0]);
        assert_eq!(cli.overrides.negative_suffix.as_deref(), Some("-inf"));
    }

    #[test]
    fn rejects_non_numeric_value() {
        let err = Cli::parse_args(["trendmark", "abc"]).unwrap_err();
        assert!(err.to_string().contains("'abc' is not a number"), "{err}");
    }

    #[test]
    fn completions_written_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut command = Cli::command();
        let path = write_completions(Shell::Bash, &mut command, "trendmark".to_string(), dir.path())
            .unwrap();
        assert_eq!(path, dir.path().join("trendmark.bash"));
        let script = fs::read_to_string(&path).unwrap();
        assert!(script.contains("trendmark"));
        assert!(script.contains("--save-html"));
    }

    #[test]
    fn completions_create_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("share/zsh/site-functions");
        generate_completions(Shell::Zsh, Some(nested.clone()), false).unwrap();
        assert!(nested.join("_trendmark").is_file());
    }

    #[test]
    fn save_html_defaults_path() {
        let cli = Cli::try_parse_from(["trendmark", "1", "--save-html"]).unwrap();
        assert_eq!(cli.save_html, Some(PathBuf::from(DEFAULT_HTML_PATH)));
    }

    #[test]
    fn completions_subcommand() {
        let cli = Cli::try_parse_from(["trendmark", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: Shell::Bash,
                install: false,
                ..
            })
        ));
    }
}
