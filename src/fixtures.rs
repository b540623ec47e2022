/// Fixture data for tests and benchmarks
///
/// Deterministic ranking rows covering several leagues and seasons, with a
/// few deliberate ties and missing metrics so sort stability and absent-value
/// ordering get exercised.
use crate::dataset::Row;

/// The two-row dataset used by the page scenarios
pub fn lakers_bulls() -> Vec<Row> {
    vec![
        Row::new("Lakers", "NBA", 2001, 91.2),
        Row::new("Bulls", "NBA", 1996, 95.7),
    ]
}

/// A mixed dataset across leagues and years
pub fn sample_rows() -> Vec<Row> {
    vec![
        Row::new("Chicago Bulls", "NBA", 1996, 95.7)
            .with_era_score(3.12)
            .with_league_score(2.98)
            .with_slug("chicago-bulls-1996"),
        Row::new("Los Angeles Lakers", "NBA", 2001, 91.2)
            .with_era_score(2.41)
            .with_league_score(2.55)
            .with_slug("los-angeles-lakers-2001"),
        Row::new("Golden State Warriors", "NBA", 2016, 93.4)
            .with_era_score(2.87)
            .with_league_score(2.91),
        Row::new("Detroit Red Wings", "NHL", 1996, 88.9)
            .with_era_score(2.02)
            .with_league_score(2.44)
            .with_slug("detroit-red-wings-1996"),
        Row::new("Montreal Canadiens", "NHL", 1977, 94.1)
            .with_era_score(2.95)
            .with_league_score(3.05),
        Row::new("Edmonton Oilers", "NHL", 1984, 90.5)
            .with_era_score(2.33),
        Row::new("New York Yankees", "MLB", 1998, 92.8)
            .with_era_score(2.66)
            .with_league_score(2.71)
            .with_slug("new-york-yankees-1998"),
        Row::new("Seattle Mariners", "MLB", 2001, 89.6)
            .with_era_score(2.15)
            .with_league_score(2.38),
        Row::new("Cincinnati Reds", "MLB", 1975, 88.9)
            .with_era_score(2.02),
        Row::new("New England Patriots", "NFL", 2007, 93.4)
            .with_era_score(2.80)
            .with_league_score(2.64),
        Row::new("Miami Dolphins", "NFL", 1972, 90.1),
        Row::new("St. Louis Rams", "NFL", 2001, 87.3)
            .with_league_score(1.97),
    ]
}

/// Generate a larger dataset for benchmarks
///
/// Cycles through the sample rows, shifting years and nudging scores so the
/// result has many distinct keys.
pub fn generated_rows(count: usize) -> Vec<Row> {
    let base = sample_rows();
    (0..count)
        .map(|i| {
            let template = &base[i % base.len()];
            let mut row = template.clone();
            row.year = template.year + (i / base.len()) as i64 % 40;
            row.score = template.score.map(|s| s - (i % 97) as f64 * 0.01);
            row.team_name = format!("{} #{}", template.team_name, i);
            row
        })
        .collect()
}
