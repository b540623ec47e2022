use anyhow::Result;
use std::path::Path;

use crate::commands::{build_runtime, load_dataset, FilterArgs};
use crate::config::Config;
use crate::formatting::format_header;
use crate::page::Page;

/// Text dump of the rendered page regions
///
/// Table body, results count, chip list and final URL, each under its own
/// header. Regions the page lacks are left out.
pub fn format_render(page: &Page) -> String {
    let mut output = String::new();

    if let Some(body) = page.body_html() {
        output.push_str(&format_header("Rows", true));
        output.push_str(&body);
        output.push_str("\n\n");
    }
    if let Some(count) = &page.results_count {
        output.push_str(&format_header("Count", false));
        output.push_str(count);
        output.push_str("\n\n");
    }
    if let Some(chips) = page.chips_html() {
        output.push_str(&format_header("Active filters", false));
        if !chips.is_empty() {
            output.push_str(&chips);
            output.push('\n');
        }
        output.push('\n');
    }
    output.push_str(&format_header("URL", false));
    output.push_str(page.url());
    output.push('\n');
    output
}

pub fn run(data: &Path, html: bool, filters: &FilterArgs, config: &Config) -> Result<()> {
    let dataset = load_dataset(data, html, &config.page)?;
    let runtime = build_runtime(dataset, filters, &config.page);
    print!("{}", format_render(runtime.page()));
    Ok(())
}
