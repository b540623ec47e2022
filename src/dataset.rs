//! Dataset store for the ranking page.
//!
//! The page embeds its rows as a JSON array inside a `<script>` block. The
//! store parses that payload once and hands out shared read-only rows.
//! Parsing never fails loudly: a missing or broken payload becomes an empty
//! dataset, and the table simply shows its empty state.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{DatasetError, DatasetResult};

/// One ranked team-season
///
/// Rank is not stored here: it is the 1-based position in the rendered view.
/// A row missing its team name or league keeps an empty string rather than
/// failing the whole payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Row {
    #[serde(rename = "teamname", default)]
    pub team_name: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub era_score: Option<f64>,
    #[serde(default)]
    pub league_score: Option<f64>,
    #[serde(default)]
    pub league: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub year: i64,
    #[serde(default)]
    pub slug: Option<String>,
}

impl Row {
    /// Create a row with a composite score and no secondary metrics
    pub fn new(
        team_name: impl Into<String>,
        league: impl Into<String>,
        year: i64,
        score: f64,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            score: Some(score),
            era_score: None,
            league_score: None,
            league: league.into(),
            year,
            slug: None,
        }
    }

    pub fn with_era_score(mut self, era_score: f64) -> Self {
        self.era_score = Some(era_score);
        self
    }

    pub fn with_league_score(mut self, league_score: f64) -> Self {
        self.league_score = Some(league_score);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Text form of the year, as used for filter membership
    pub fn year_key(&self) -> String {
        self.year.to_string()
    }
}

/// Years arrive as JSON numbers from the site builder, but hand-edited
/// payloads sometimes quote them.
fn deserialize_year<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearValue {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match YearValue::deserialize(deserializer)? {
        YearValue::Int(year) => Ok(year),
        YearValue::Float(year) if year.fract() == 0.0 => Ok(year as i64),
        YearValue::Float(year) => Err(serde::de::Error::custom(format!("Invalid year: {}", year))),
        YearValue::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid year: {}", text))),
    }
}

/// Parse a JSON array of rows
pub fn parse(payload: &str) -> DatasetResult<Vec<Row>> {
    let rows: Vec<Row> = serde_json::from_str(payload)?;
    Ok(rows)
}

/// Extract the text content of the element with the given id from a page
///
/// Only handles the simple `<script id="..." type="application/json">...</script>`
/// shape the site builder emits.
pub fn embedded_payload<'a>(html: &'a str, element_id: &str) -> Option<&'a str> {
    let needles = [
        format!("id=\"{}\"", element_id),
        format!("id='{}'", element_id),
    ];
    // The attribute name must stand alone, not end another one like `data-id`
    let attr_pos = needles
        .iter()
        .flat_map(|needle| html.match_indices(needle.as_str()))
        .map(|(pos, _)| pos)
        .filter(|&pos| html[..pos].ends_with(|c: char| c.is_ascii_whitespace()))
        .min()?;
    let open_end = attr_pos + html[attr_pos..].find('>')? + 1;
    let close = open_end + html[open_end..].find("</script>")?;
    Some(html[open_end..close].trim())
}

/// Immutable row storage, loaded once per page
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    rows: Arc<Vec<Row>>,
}

impl DatasetStore {
    /// Load rows from the embedded payload, degrading to an empty dataset
    pub fn load(payload: Option<&str>) -> Self {
        let result = match payload {
            Some(text) => parse(text),
            None => Err(DatasetError::MissingPayload),
        };

        match result {
            Ok(rows) => {
                debug!("DATASET: Loaded {} rows", rows.len());
                Self::from_rows(rows)
            }
            Err(e) => {
                warn!("DATASET: {} - continuing with empty dataset", e);
                Self::default()
            }
        }
    }

    /// Load rows from a full HTML page containing the payload block
    pub fn from_html(html: &str, element_id: &str) -> Self {
        Self::load(embedded_payload(html, element_id))
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct years in ascending numeric order, as option values
    pub fn years(&self) -> Vec<String> {
        let years: BTreeSet<i64> = self.rows.iter().map(|r| r.year).collect();
        years.into_iter().map(|y| y.to_string()).collect()
    }

    /// Distinct non-empty leagues in sorted order, as option values
    pub fn leagues(&self) -> Vec<String> {
        let leagues: BTreeSet<&str> = self
            .rows
            .iter()
            .map(|r| r.league.as_str())
            .filter(|league| !league.is_empty())
            .collect();
        leagues.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {"teamname": "Lakers", "score": 91.2, "era_score": 1.5, "league_score": 2.1, "league": "NBA", "year": 2001, "slug": "lakers-2001"},
        {"teamname": "Bulls", "score": 95.7, "era_score": 2.4, "league_score": 3.0, "league": "NBA", "year": 1996}
    ]"#;

    #[test]
    fn test_parse_rows() {
        let rows = parse(PAYLOAD).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team_name, "Lakers");
        assert_eq!(rows[0].score, Some(91.2));
        assert_eq!(rows[0].slug.as_deref(), Some("lakers-2001"));
        assert_eq!(rows[1].slug, None);
        assert_eq!(rows[1].year_key(), "1996");
    }

    #[test]
    fn test_parse_accepts_quoted_year_and_null_metric() {
        let rows = parse(
            r#"[{"teamname": "Yankees", "score": null, "league": "MLB", "year": "1998"}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].year, 1998);
        assert_eq!(rows[0].score, None);
        assert_eq!(rows[0].era_score, None);
    }

    #[test]
    fn test_row_without_league_keeps_the_rest() {
        let store = DatasetStore::load(Some(
            r#"[
                {"teamname": "Lakers", "score": 91.2, "league": "NBA", "year": 2001},
                {"teamname": "Unknown", "score": 50.0, "year": 1990}
            ]"#,
        ));
        assert_eq!(store.len(), 2);
        assert_eq!(store.leagues(), vec!["NBA"]);
    }

    #[test]
    fn test_parse_rejects_bad_year() {
        let result = parse(r#"[{"teamname": "X", "league": "NHL", "year": "soon"}]"#);
        assert!(matches!(result, Err(DatasetError::Malformed(_))));
    }

    #[test]
    fn test_load_malformed_payload_is_empty() {
        let store = DatasetStore::load(Some("not json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_missing_payload_is_empty() {
        let store = DatasetStore::load(None);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_load_non_array_payload_is_empty() {
        let store = DatasetStore::load(Some(r#"{"teamname": "Lakers"}"#));
        assert!(store.is_empty());
    }

    #[test]
    fn test_embedded_payload_extraction() {
        let html = format!(
            "<html><body><table></table><script id=\"metric-data\" type=\"application/json\">\n{}\n</script></body></html>",
            PAYLOAD
        );
        let payload = embedded_payload(&html, "metric-data").unwrap();
        assert!(payload.starts_with('['));
        assert!(payload.ends_with(']'));

        let store = DatasetStore::from_html(&html, "metric-data");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_embedded_payload_skips_prefixed_id_attribute() {
        let html = "<div data-id=\"metric-data\">decoy</div>\
                    <script id='metric-data' type=\"application/json\">[]</script>";
        assert_eq!(embedded_payload(html, "metric-data"), Some("[]"));
        assert_eq!(embedded_payload("<p data-id=\"metric-data\">x</p>", "metric-data"), None);
    }

    #[test]
    fn test_embedded_payload_missing_element() {
        assert_eq!(embedded_payload("<html></html>", "metric-data"), None);
        assert!(DatasetStore::from_html("<html></html>", "metric-data").is_empty());
    }

    #[test]
    fn test_distinct_years_and_leagues() {
        let store = DatasetStore::from_rows(vec![
            Row::new("A", "NHL", 2001, 1.0),
            Row::new("B", "NBA", 1996, 2.0),
            Row::new("C", "NBA", 2001, 3.0),
            Row::new("D", "MLB", 987, 4.0),
        ]);
        assert_eq!(store.years(), vec!["987", "1996", "2001"]);
        assert_eq!(store.leagues(), vec!["MLB", "NBA", "NHL"]);
    }
}
