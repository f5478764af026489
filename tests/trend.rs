use maud::html;
use trendmark::config::parse_config;
use trendmark::{TrendConfig, Variant, format};

#[test]
fn default_scenarios() {
    let cases = [
        (5.0, "blue", " Increase ↑"),
        (-3.0, "brown", " Decrease ↓"),
        (0.0, "muted", ""),
        (-0.0, "muted", ""),
    ];
    for (value, class, suffix) in cases {
        let trend = format(value, None);
        assert_eq!(trend.class, class, "class for {value}");
        assert_eq!(trend.suffix, suffix, "suffix for {value}");
    }
}

#[test]
fn config_from_json_drives_rendering() {
    let config = parse_config(r#"{"positiveStyle": "green", "positiveSuffix": " Up"}"#).unwrap();
    assert_eq!(
        format(2, Some(&config)).to_html(),
        "<span class=\"green\"> Up</span>"
    );
    assert_eq!(
        format(-2, Some(&config)).to_html(),
        "<span class=\"brown\"> Decrease ↓</span>"
    );
}

#[test]
fn empty_suffix_keeps_class() {
    let config = TrendConfig::default().with_negative_suffix("");
    let trend = format(-1, Some(&config));
    assert_eq!(trend.variant, Variant::Negative);
    assert_eq!(trend.to_html(), "<span class=\"brown\"></span>");
}

#[test]
fn embeds_in_maud_templates() {
    let trend = format(1.5, None);
    let row = html! { td { (trend) } };
    assert_eq!(
        row.into_string(),
        "<td><span class=\"blue\"> Increase ↑</span></td>"
    );
}

#[test]
fn shared_across_threads() {
    let config = std::sync::Arc::new(TrendConfig::default().with_base_suffix(" Flat"));
    let handles: Vec<_> = [-1.0, 0.0, 1.0]
        .into_iter()
        .map(|value| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || format(value, Some(&*config)).suffix)
        })
        .collect();
    let suffixes: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(suffixes, vec![" Decrease ↓", " Flat", " Increase ↑"]);
}
