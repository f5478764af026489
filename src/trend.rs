use maud::{Markup, Render, html};
use serde::Deserialize;

pub const DEFAULT_POSITIVE_STYLE: &str = "blue";
pub const DEFAULT_NEGATIVE_STYLE: &str = "brown";
pub const DEFAULT_BASE_STYLE: &str = "muted";
pub const DEFAULT_POSITIVE_SUFFIX: &str = " Increase ↑";
pub const DEFAULT_NEGATIVE_SUFFIX: &str = " Decrease ↓";
pub const DEFAULT_BASE_SUFFIX: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Positive,
    Negative,
    Base,
}

impl Variant {
    /// Picks the variant by sign. `NaN` and both zeros land on [`Variant::Base`].
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Base
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Base => "base",
        }
    }
}

/// Numeric inputs accepted by [`format`]. Wide integers convert with the usual
/// `as f64` rounding, which never changes their sign.
pub trait TrendValue: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_trend_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TrendValue for $ty {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_trend_value!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

/// Display settings for the three variants. Fields missing from a JSON
/// object keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TrendConfig {
    #[serde(alias = "positive")]
    pub positive_style: String,
    #[serde(alias = "negative")]
    pub negative_style: String,
    #[serde(alias = "base")]
    pub base_style: String,
    pub positive_suffix: String,
    pub negative_suffix: String,
    pub base_suffix: String,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            positive_style: DEFAULT_POSITIVE_STYLE.to_string(),
            negative_style: DEFAULT_NEGATIVE_STYLE.to_string(),
            base_style: DEFAULT_BASE_STYLE.to_string(),
            positive_suffix: DEFAULT_POSITIVE_SUFFIX.to_string(),
            negative_suffix: DEFAULT_NEGATIVE_SUFFIX.to_string(),
            base_suffix: DEFAULT_BASE_SUFFIX.to_string(),
        }
    }
}

impl TrendConfig {
    #[must_use]
    pub fn with_positive_style(mut self, style: impl Into<String>) -> Self {
        self.positive_style = style.into();
        self
    }

    #[must_use]
    pub fn with_negative_style(mut self, style: impl Into<String>) -> Self {
        self.negative_style = style.into();
        self
    }

    #[must_use]
    pub fn with_base_style(mut self, style: impl Into<String>) -> Self {
        self.base_style = style.into();
        self
    }

    #[must_use]
    pub fn with_positive_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.positive_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_negative_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.negative_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_base_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.base_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn style(&self, variant: Variant) -> &str {
        match variant {
            Variant::Positive => &self.positive_style,
            Variant::Negative => &self.negative_style,
            Variant::Base => &self.base_style,
        }
    }

    #[must_use]
    pub fn suffix(&self, variant: Variant) -> &str {
        match variant {
            Variant::Positive => &self.positive_suffix,
            Variant::Negative => &self.negative_suffix,
            Variant::Base => &self.base_suffix,
        }
    }
}

/// A resolved indicator: the variant plus the class and text it renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub variant: Variant,
    pub class: String,
    pub suffix: String,
}

impl Trend {
    /// Renders `<span class="{class}">{suffix}</span>` with both parts escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

impl Render for Trend {
    fn render(&self) -> Markup {
        html! {
            span class=(self.class) { (self.suffix) }
        }
    }
}

/// Resolves the indicator for `value`. Without a config the defaults apply.
#[must_use]
pub fn format(value: impl TrendValue, config: Option<&TrendConfig>) -> Trend {
    let variant = Variant::classify(value.to_f64());
    match config {
        Some(config) => resolve(variant, config),
        None => resolve(variant, &TrendConfig::default()),
    }
}

fn resolve(variant: Variant, config: &TrendConfig) -> Trend {
    Trend {
        variant,
        class: config.style(variant).to_string(),
        suffix: config.suffix(variant).to_string(),
    }
}
