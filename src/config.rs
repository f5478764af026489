use crate::trend::TrendConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use tokio::fs;

pub fn parse_config(input: &str) -> Result<TrendConfig> {
    serde_json::from_str(input).context("failed to parse trend config JSON")
}

pub async fn load_config(path: &Path) -> Result<TrendConfig> {
    let contents = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config {}", path.display()))
}

/// Per-field replacements applied on top of a loaded or default config.
#[derive(Debug, Clone, Default, Args)]
pub struct TrendOverrides {
    #[arg(long, value_name = "CLASS", help = "Class for values above zero.")]
    pub positive_style: Option<String>,
    #[arg(long, value_name = "CLASS", help = "Class for values below zero.")]
    pub negative_style: Option<String>,
    #[arg(long, value_name = "CLASS", help = "Class for zero and NaN.")]
    pub base_style: Option<String>,
    #[arg(
        long,
        value_name = "TEXT",
        allow_hyphen_values = true,
        help = "Text shown for values above zero."
    )]
    pub positive_suffix: Option<String>,
    #[arg(
        long,
        value_name = "TEXT",
        allow_hyphen_values = true,
        help = "Text shown for values below zero."
    )]
    pub negative_suffix: Option<String>,
    #[arg(
        long,
        value_name = "TEXT",
        allow_hyphen_values = true,
        help = "Text shown for zero and NaN."
    )]
    pub base_suffix: Option<String>,
}

impl TrendOverrides {
    #[must_use]
    pub fn apply(self, mut config: TrendConfig) -> TrendConfig {
        let Self {
            positive_style,
            negative_style,
            base_style,
            positive_suffix,
            negative_suffix,
            base_suffix,
        } = self;
        replace(&mut config.positive_style, positive_style);
        replace(&mut config.negative_style, negative_style);
        replace(&mut config.base_style, base_style);
        replace(&mut config.positive_suffix, positive_suffix);
        replace(&mut config.negative_suffix, negative_suffix);
        replace(&mut config.base_suffix, base_suffix);
        config
    }
}

fn replace(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}
