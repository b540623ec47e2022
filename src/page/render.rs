//! Render sink: writes the view into the page regions.
//!
//! Every region is rebuilt wholesale from the view and the state. Regions a
//! page variant lacks are skipped.

use tracing::{debug, trace};

use crate::config::PageConfig;
use crate::dataset::Row;
use crate::formatting::{count_label, format_metric, league_class};

use super::chips::chips_for;
use super::document::Page;
use super::element::Element;
use super::state::AppState;
use super::url::page_url;

/// Columns of a data row, used as the placeholder's colspan
pub const TABLE_COLUMNS: usize = 7;

const SCORE_TOOLTIP: &str = "Score: Composite metric 0-100";
const ERA_TOOLTIP: &str = "Era Z: Dominance vs global field";
const LEAGUE_Z_TOOLTIP: &str = "League Z: Dominance vs league field";
const LEAGUE_TOOLTIP: &str = "League";
const YEAR_TOOLTIP: &str = "Season Year";

/// Result of one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutcome {
    pub count: usize,
}

pub struct Renderer {
    team_link_prefix: String,
    empty_message: String,
}

impl Renderer {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            team_link_prefix: config.team_link_prefix.clone(),
            empty_message: config.empty_message.clone(),
        }
    }

    /// Write rows, count, chips, sort markers and the URL
    pub fn render(&self, page: &mut Page, rows: &[&Row], state: &AppState) -> RenderOutcome {
        let count = rows.len();

        match page.table_body.as_mut() {
            Some(body) => {
                *body = if rows.is_empty() {
                    vec![self.placeholder_row()]
                } else {
                    rows.iter()
                        .enumerate()
                        .map(|(i, row)| self.row_element(i + 1, row))
                        .collect()
                };
            }
            None => trace!("RENDER: No table body, skipping rows"),
        }

        match page.results_count.as_mut() {
            Some(label) => *label = count_label(count),
            None => trace!("RENDER: No results counter"),
        }

        match page.active_filters.as_mut() {
            Some(chips) => {
                *chips = chips_for(&state.filters)
                    .iter()
                    .map(|chip| chip.to_element())
                    .collect();
            }
            None => trace!("RENDER: No chip list"),
        }

        for header in page.sort_headers.iter_mut() {
            header.marker = (&header.column == state.sort.column()).then(|| state.sort.direction());
        }

        let url = page_url(page.history.path(), &state.filters);
        debug!("URL: Replacing location with {}", url);
        page.history.replace_state(url);

        debug!("RENDER: {} rows", count);
        RenderOutcome { count }
    }

    /// Table row for a ranked entry
    pub fn row_element(&self, rank: usize, row: &Row) -> Element {
        let team_cell = Element::new("td").class("team-col");
        let team_cell = match &row.slug {
            Some(slug) => team_cell.child(
                Element::new("a")
                    .attr("href", format!("{}{}.html", self.team_link_prefix, slug))
                    .class("team-link")
                    .text(row.team_name.as_str()),
            ),
            None => team_cell.text(row.team_name.as_str()),
        };

        Element::new("tr")
            .attr("data-year", row.year_key())
            .attr("data-league", row.league.as_str())
            .child(Element::new("td").class("rank-col").text(rank.to_string()))
            .child(team_cell)
            .child(
                Element::new("td")
                    .class("score-col")
                    .child(tooltip(SCORE_TOOLTIP, format_metric(row.score))),
            )
            .child(Element::new("td").child(tooltip(ERA_TOOLTIP, format_metric(row.era_score))))
            .child(
                Element::new("td")
                    .child(tooltip(LEAGUE_Z_TOOLTIP, format_metric(row.league_score))),
            )
            .child(
                Element::new("td").child(
                    Element::new("span")
                        .class(format!("badge {} tooltip", league_class(&row.league)))
                        .attr("data-tooltip", LEAGUE_TOOLTIP)
                        .text(row.league.as_str()),
                ),
            )
            .child(Element::new("td").child(tooltip(YEAR_TOOLTIP, row.year_key())))
    }

    /// Single row shown when nothing matches
    pub fn placeholder_row(&self) -> Element {
        Element::new("tr").child(
            Element::new("td")
                .attr("colspan", TABLE_COLUMNS.to_string())
                .class("empty-state")
                .text(self.empty_message.as_str()),
        )
    }
}

fn tooltip(text: &str, content: String) -> Element {
    Element::new("span")
        .class("tooltip")
        .attr("data-tooltip", text)
        .text(content)
}
