use unicode_width::UnicodeWidthStr;

/// Format a metric with two decimals; absent or non-finite values render empty
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => String::new(),
    }
}

/// Label for the results counter
pub fn count_label(count: usize) -> String {
    format!("{} rows", count)
}

/// Summary label for a multi-select trigger
///
/// Values are expected in sorted order. An empty selection reads as "All".
pub fn summary_label<'a, I>(label: &str, values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = values.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        format!("{}: All", label)
    } else {
        format!("{}: {}", label, joined)
    }
}

/// CSS class for a league badge, whitespace stripped
pub fn league_class(league: &str) -> String {
    let compact: String = league.chars().filter(|c| !c.is_whitespace()).collect();
    format!("league-{}", compact)
}

/// Pad text on the right to a display width
pub fn pad_right(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}

/// Pad text on the left to a display width
pub fn pad_left(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), text)
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, underlines with `=`, otherwise `-`
///
/// # Returns
/// The header followed by an underline of matching display width
pub fn format_header(text: &str, double_line: bool) -> String {
    let underline = if double_line { "=" } else { "-" };
    format!("{}\n{}\n", text, underline.repeat(text.width()))
}
