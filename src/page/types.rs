/// Core type definitions used across the page engine
///
/// Filter dimensions, sort columns and sort directions. Sort columns are
/// addressed from the table headers by their `data-sort` attribute.
use phf::phf_map;
use std::fmt;

/// A set-valued filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Years,
    Leagues,
}

impl Dimension {
    pub fn all() -> [Self; 2] {
        [Self::Years, Self::Leagues]
    }

    /// Query-string parameter name, also used as `data-target` / `data-dimension`
    pub fn param(&self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Leagues => "leagues",
        }
    }

    /// Human label used in trigger summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Years => "Years",
            Self::Leagues => "Leagues",
        }
    }

    /// Singular noun used in chip labels ("Remove year 1996")
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Years => "year",
            Self::Leagues => "league",
        }
    }

    pub fn from_param(name: &str) -> Option<Self> {
        match name {
            "years" => Some(Self::Years),
            "leagues" => Some(Self::Leagues),
            _ => None,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flip(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Class put on the active sort header
    pub fn header_class(&self) -> &'static str {
        match self {
            Self::Ascending => "active-asc",
            Self::Descending => "active-desc",
        }
    }
}

/// Sortable column
///
/// `Other` holds a header name the engine does not know. Rows never differ
/// on it, so sorting by it leaves the filtered order untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Score,
    EraScore,
    LeagueScore,
    TeamName,
    League,
    Year,
    Other(String),
}

/// `data-sort` attribute values, including the camelCase spellings older
/// page templates used
static SORT_COLUMNS: phf::Map<&'static str, SortColumn> = phf_map! {
    "score" => SortColumn::Score,
    "era_score" => SortColumn::EraScore,
    "eraScore" => SortColumn::EraScore,
    "league_score" => SortColumn::LeagueScore,
    "leagueScore" => SortColumn::LeagueScore,
    "teamname" => SortColumn::TeamName,
    "teamName" => SortColumn::TeamName,
    "league" => SortColumn::League,
    "year" => SortColumn::Year,
};

impl SortColumn {
    /// Resolve a `data-sort` attribute value
    pub fn parse(name: &str) -> Self {
        SORT_COLUMNS
            .get(name)
            .cloned()
            .unwrap_or_else(|| Self::Other(name.to_string()))
    }

    /// Canonical `data-sort` attribute value
    pub fn key(&self) -> &str {
        match self {
            Self::Score => "score",
            Self::EraScore => "era_score",
            Self::LeagueScore => "league_score",
            Self::TeamName => "teamname",
            Self::League => "league",
            Self::Year => "year",
            Self::Other(name) => name,
        }
    }

    /// Columns the ranking table renders a sortable header for
    pub fn table_columns() -> [Self; 6] {
        [
            Self::TeamName,
            Self::Score,
            Self::EraScore,
            Self::LeagueScore,
            Self::League,
            Self::Year,
        ]
    }

    pub fn header_label(&self) -> &str {
        match self {
            Self::Score => "Score",
            Self::EraScore => "Era Z",
            Self::LeagueScore => "League Z",
            Self::TeamName => "Team",
            Self::League => "League",
            Self::Year => "Year",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
