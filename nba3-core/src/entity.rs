use crate::season::SeasonRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// NBA conference. Source documents spell these either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Conference {
    #[serde(alias = "Eastern Conference")]
    Eastern,
    #[serde(alias = "Western Conference")]
    Western,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::Eastern, Conference::Western];

    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::Eastern => "Eastern",
            Conference::Western => "Western",
        }
    }

    /// Parse the stored/display name back into a conference.
    pub fn parse(s: &str) -> Option<Conference> {
        match s {
            "Eastern" | "Eastern Conference" => Some(Conference::Eastern),
            "Western" | "Western Conference" => Some(Conference::Western),
            _ => None,
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A player and their season series, ascending by year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntity {
    #[serde(rename = "player", alias = "name")]
    pub name: String,
    pub seasons: Vec<SeasonRecord>,
}

/// A team, its conference/division placement and season series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEntity {
    #[serde(rename = "team", alias = "name")]
    pub name: String,
    pub conference: Conference,
    pub division: String,
    pub seasons: Vec<SeasonRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conference_accepts_both_spellings() {
        let east: Conference = serde_json::from_str("\"Eastern Conference\"").unwrap();
        let west: Conference = serde_json::from_str("\"Western\"").unwrap();
        assert_eq!(east, Conference::Eastern);
        assert_eq!(west, Conference::Western);
        assert!(serde_json::from_str::<Conference>("\"Central\"").is_err());
        assert_eq!(Conference::parse("Western Conference"), Some(Conference::Western));
        assert_eq!(Conference::parse("western"), None);
    }

    #[test]
    fn team_requires_conference() {
        let json = r#"{"team": "Celtics", "division": "Atlantic", "seasons": []}"#;
        assert!(serde_json::from_str::<TeamEntity>(json).is_err());
    }
}
