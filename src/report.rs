use crate::formatting::format_value;
use crate::input::TrendRecord;
use crate::write_output_file;
use anyhow::Result;
use chrono::{DateTime, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use minify_html::{Cfg, minify};
use std::path::Path;
use trendmark::{Trend, Variant};

pub struct HtmlReportContext<'a> {
    pub(crate) run_started_at: &'a DateTime<Local>,
    pub(crate) rows: &'a [(TrendRecord, Trend)],
    pub(crate) minify: bool,
}

pub async fn save_html_report(output_path: &Path, context: &HtmlReportContext<'_>) -> Result<()> {
    let html = render_html_report(context);
    if context.minify {
        let minified = minify(html.as_bytes(), &minify_config());
        write_output_file(output_path, &minified).await
    } else {
        write_output_file(output_path, html.as_bytes()).await
    }
}

fn minify_config() -> Cfg {
    Cfg {
        minify_css: true,
        ..Cfg::default()
    }
}

fn render_html_report(context: &HtmlReportContext<'_>) -> String {
    let generated_at = context
        .run_started_at
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string();
    let title = format!(
        "Trend Report - {}",
        context.run_started_at.format("%Y-%m-%d")
    );

    let document = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(REPORT_STYLE)) }
            }
            body {
                div.page {
                    header.hero {
                        div.pill { "trendmark v" (env!("CARGO_PKG_VERSION")) }
                        h1 { "Trend Report" }
                        div.meta {
                            span.label { "Generated" }
                            span.value.mono { (generated_at) }
                        }
                    }
                    (render_cards(context.rows))
                    (render_table(context.rows))
                }
            }
        }
    };
    document.into_string()
}

fn render_cards(rows: &[(TrendRecord, Trend)]) -> Markup {
    let count = |variant: Variant| rows.iter().filter(|(_, t)| t.variant == variant).count();
    html! {
        section.cards {
            div.card { div.card-label { "Values" } div.card-value { (rows.len()) } }
            div.card { div.card-label { "Increase" } div.card-value { (count(Variant::Positive)) } }
            div.card { div.card-label { "Decrease" } div.card-value { (count(Variant::Negative)) } }
            div.card { div.card-label { "Neutral" } div.card-value { (count(Variant::Base)) } }
        }
    }
}

fn render_table(rows: &[(TrendRecord, Trend)]) -> Markup {
    html! {
        section.table-card {
            table {
                thead { tr { th { "#" } th { "Label" } th { "Value" } th { "Trend" } } }
                tbody {
                    @for (position, (record, trend)) in rows.iter().enumerate() {
                        tr {
                            td.num { (position + 1) }
                            td.label-cell {
                                @if let Some(label) = &record.label { (label) } @else { "-" }
                            }
                            td.num.mono { (format_value(record.value)) }
                            td { (trend) }
                        }
                    }
                }
            }
        }
    }
}

const REPORT_STYLE: &str = r"
:root {
  --ink: #1f1b16;
  --muted-ink: #6b635b;
  --border: #e2d6c6;
  --card: #ffffff;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, sans-serif;
  color: var(--ink);
  background: linear-gradient(150deg, #f6f3ec, #efe7db);
}

.page {
  max-width: 960px;
  margin: 0 auto;
  padding: 48px 24px 64px;
}

.hero,
.table-card,
.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 16px;
}

.hero {
  padding: 28px 32px;
}

.pill {
  display: inline-block;
  font-size: 12px;
  padding: 4px 10px;
  border-radius: 999px;
  background: #3d405b;
  color: #ffffff;
}

.meta .label {
  color: var(--muted-ink);
  margin-right: 8px;
}

.mono {
  font-family: ui-monospace, monospace;
}

.cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: 16px;
  margin: 24px 0;
}

.card {
  padding: 16px 20px;
}

.card-label {
  color: var(--muted-ink);
  font-size: 13px;
}

.card-value {
  font-size: 28px;
  font-weight: 600;
}

.table-card {
  padding: 8px 16px;
  overflow-x: auto;
}

table {
  width: 100%;
  border-collapse: collapse;
}

th,
td {
  text-align: left;
  padding: 10px 8px;
  border-bottom: 1px solid var(--border);
}

td.num {
  text-align: right;
}

.blue {
  color: #2563eb;
}

.brown {
  color: #92400e;
}

.muted {
  color: var(--muted-ink);
}
";
