//! Filter state ⇄ URL query string.
//!
//! Encoding follows `application/x-www-form-urlencoded`, the same rules the
//! browser's `URLSearchParams` applies, so links written by the page and by
//! the command line are interchangeable.

use form_urlencoded::{parse, Serializer};
use tracing::trace;

use super::state::FilterState;
use super::types::Dimension;

pub const SEARCH_PARAM: &str = "search";

/// Separator for list-valued parameters
const LIST_SEPARATOR: char = ',';

/// Encode filters as a query string (without the leading `?`)
///
/// Unrestricted dimensions and empty search text are omitted entirely.
pub fn encode(filters: &FilterState) -> String {
    let mut serializer = Serializer::new(String::new());
    for dim in Dimension::all() {
        let values = filters.values(dim);
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(",");
            serializer.append_pair(dim.param(), &joined);
        }
    }
    if !filters.search().is_empty() {
        serializer.append_pair(SEARCH_PARAM, filters.search());
    }
    serializer.finish()
}

/// Decode a query string into filters
///
/// A leading `?` is accepted. List parameters are split on `,` with empty
/// tokens dropped. When a parameter repeats, the first occurrence wins.
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut years: Option<String> = None;
    let mut leagues: Option<String> = None;
    let mut search: Option<String> = None;

    for (key, value) in parse(query.as_bytes()) {
        let slot = match Dimension::from_param(&key) {
            Some(Dimension::Years) => &mut years,
            Some(Dimension::Leagues) => &mut leagues,
            None if key == SEARCH_PARAM => &mut search,
            None => {
                trace!("URL: Ignoring parameter {}", key);
                continue;
            }
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let mut filters = FilterState::default();
    if let Some(years) = years {
        filters.replace_years(years.split(LIST_SEPARATOR));
    }
    if let Some(leagues) = leagues {
        filters.replace_leagues(leagues.split(LIST_SEPARATOR));
    }
    if let Some(search) = search {
        filters.set_search(&search);
    }
    filters
}

/// Build the page URL for a path and filters: `path` or `path?query`
pub fn page_url(path: &str, filters: &FilterState) -> String {
    let query = encode(filters);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(years: &[&str], leagues: &[&str], search: &str) -> FilterState {
        let mut f = FilterState::default();
        f.replace_years(years);
        f.replace_leagues(leagues);
        f.set_search(search);
        f
    }

    #[test]
    fn test_encode_empty_state() {
        assert_eq!(encode(&FilterState::default()), "");
    }

    #[test]
    fn test_encode_single_year() {
        assert_eq!(encode(&filters(&["1996"], &[], "")), "years=1996");
    }

    #[test]
    fn test_encode_lists_and_search() {
        let encoded = encode(&filters(&["2001", "1996"], &["NBA"], "los angeles"));
        assert_eq!(encoded, "years=1996%2C2001&leagues=NBA&search=los+angeles");
    }

    #[test]
    fn test_decode_absent_params_are_unrestricted() {
        let decoded = decode("");
        assert!(decoded.is_unrestricted());
        assert!(decode("?").is_unrestricted());
        assert!(decode("page=2").is_unrestricted());
    }

    #[test]
    fn test_decode_splits_and_drops_empty_tokens() {
        let decoded = decode("?years=1996,,2001,&leagues=%2CNHL");
        let years: Vec<&str> = decoded.years().iter().map(String::as_str).collect();
        let leagues: Vec<&str> = decoded.leagues().iter().map(String::as_str).collect();
        assert_eq!(years, vec!["1996", "2001"]);
        assert_eq!(leagues, vec!["NHL"]);
    }

    #[test]
    fn test_decode_search_keeps_commas() {
        let decoded = decode("search=a%2Cb");
        assert_eq!(decoded.search(), "a,b");
    }

    #[test]
    fn test_decode_first_occurrence_wins() {
        let decoded = decode("years=1996&years=2001");
        assert_eq!(decoded.years().len(), 1);
        assert!(decoded.years().contains("1996"));
    }

    #[test]
    fn test_decode_plus_is_space() {
        assert_eq!(decode("search=red+wings").search(), "red wings");
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            filters(&[], &[], ""),
            filters(&["1996"], &[], ""),
            filters(&["1996", "2001"], &["NBA", "NHL"], "la"),
            filters(&[], &["Premier League"], "a, b & c"),
            filters(&["1972"], &[], "100% +/-"),
            filters(&[], &[], "ümlaut?=#"),
        ];
        for state in cases {
            assert_eq!(decode(&encode(&state)), state, "round trip of {:?}", state);
        }
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("/rankings.html", &FilterState::default()), "/rankings.html");
        assert_eq!(
            page_url("/rankings.html", &filters(&["1996"], &[], "")),
            "/rankings.html?years=1996"
        );
    }
}
