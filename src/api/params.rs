//! Typed values for the enumerated query parameters

use std::fmt;
use std::str::FromStr;

/// Match state filter used by championship/hub match listings and searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchType {
    #[default]
    All,
    Upcoming,
    Ongoing,
    Past,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::All => "all",
            MatchType::Upcoming => "upcoming",
            MatchType::Ongoing => "ongoing",
            MatchType::Past => "past",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(MatchType::All),
            "upcoming" => Ok(MatchType::Upcoming),
            "ongoing" => Ok(MatchType::Ongoing),
            "past" => Ok(MatchType::Past),
            other => Err(format!(
                "invalid match type '{other}', expected one of: all, upcoming, ongoing, past"
            )),
        }
    }
}

/// Tournament listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TournamentType {
    #[default]
    Upcoming,
    Past,
}

impl TournamentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentType::Upcoming => "upcoming",
            TournamentType::Past => "past",
        }
    }
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upcoming" => Ok(TournamentType::Upcoming),
            "past" => Ok(TournamentType::Past),
            other => Err(format!(
                "invalid tournament type '{other}', expected upcoming or past"
            )),
        }
    }
}
