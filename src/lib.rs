//! Directional trend indicators: classify a value by sign and render the
//! matching class and suffix as an inline `<span>`.
//!
//! ```
//! let trend = trendmark::format(5, None);
//! assert_eq!(trend.to_html(), "<span class=\"blue\"> Increase ↑</span>");
//! ```

pub mod config;
pub mod trend;

pub use trend::{Trend, TrendConfig, TrendValue, Variant, format};
