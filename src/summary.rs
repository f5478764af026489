use crate::formatting::{format_suffix, format_value};
use crate::input::TrendRecord;
use colored::{ColoredString, Colorize};
use std::path::Path;
use trendmark::{Trend, Variant};

pub struct SummaryContext<'a> {
    pub(crate) rows: &'a [(TrendRecord, Trend)],
    pub(crate) html: Option<&'a Path>,
}

pub fn print_summary(context: &SummaryContext<'_>) {
    print_summary_header(context);
    let table_width = print_trend_table(context.rows);
    let divider = "=".repeat(table_width);
    println!("{}", divider.bright_cyan());
}

pub fn print_fragments(rows: &[(TrendRecord, Trend)]) {
    for (_, trend) in rows {
        println!("{}", trend.to_html());
    }
}

fn print_summary_header(context: &SummaryContext<'_>) {
    println!(
        "{}",
        "======================== Trends ========================"
            .bold()
            .bright_cyan()
    );
    let (up, down, flat) = count_variants(context.rows);
    println!(
        "{} {} | {} | {}",
        "Values".bright_yellow().bold(),
        format!("increase: {up}").bright_white(),
        format!("decrease: {down}").bright_white(),
        format!("neutral: {flat}").bright_white()
    );
    match context.html {
        Some(path) => println!(
            "{} {}",
            "HTML report".bright_yellow().bold(),
            format!("{}", path.display()).bright_white()
        ),
        None => println!(
            "{} {}",
            "HTML report".bright_yellow().bold(),
            "not saved (use --save-html)".bright_black()
        ),
    }
}

fn print_trend_table(rows: &[(TrendRecord, Trend)]) -> usize {
    let header = format!(
        "{:<16} | {:>10} | {:<10} | {}",
        "Label", "Value", "Class", "Trend"
    );
    let separator = "-----------------+------------+------------+-------------";
    let mut max_width = header.chars().count().max(separator.len());
    println!("{}", header.bold().bright_white());
    println!("{}", separator.bright_black());

    for (position, (record, trend)) in rows.iter().enumerate() {
        let label = record
            .label
            .clone()
            .unwrap_or_else(|| format!("#{}", position + 1));
        let line = format_row(&label, record.value, trend);
        max_width = max_width.max(line.chars().count());
        println!("{}", paint(line, trend.variant));
    }

    max_width
}

fn format_row(label: &str, value: f64, trend: &Trend) -> String {
    format!(
        "{:<16} | {:>10} | {:<10} | {}",
        label,
        format_value(value),
        trend.class,
        format_suffix(&trend.suffix)
    )
}

fn paint(line: String, variant: Variant) -> ColoredString {
    match variant {
        Variant::Positive => line.bright_green(),
        Variant::Negative => line.bright_red(),
        Variant::Base => line.bright_black(),
    }
}

fn count_variants(rows: &[(TrendRecord, Trend)]) -> (usize, usize, usize) {
    rows.iter()
        .fold((0, 0, 0), |(up, down, flat), (_, trend)| match trend.variant {
            Variant::Positive => (up + 1, down, flat),
            Variant::Negative => (up, down + 1, flat),
            Variant::Base => (up, down, flat + 1),
        })
}
