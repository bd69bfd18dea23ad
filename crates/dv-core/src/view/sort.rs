use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Ordering applied to the displayed document list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Keep the order storage returned.
    #[default]
    None,
    #[serde(rename = "name-asc")]
    NameAscending,
    #[serde(rename = "name-desc")]
    NameDescending,
    DateNewest,
    DateOldest,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::None => "",
            SortOption::NameAscending => "name-asc",
            SortOption::NameDescending => "name-desc",
            SortOption::DateNewest => "date-newest",
            SortOption::DateOldest => "date-oldest",
        }
    }
}

impl Display for SortOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option: {0:?} (expected name-asc, name-desc, date-newest or date-oldest)")]
pub struct ParseSortOptionError(pub String);

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(SortOption::None),
            "name-asc" => Ok(SortOption::NameAscending),
            "name-desc" => Ok(SortOption::NameDescending),
            "date-newest" => Ok(SortOption::DateNewest),
            "date-oldest" => Ok(SortOption::DateOldest),
            other => Err(ParseSortOptionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ui_values() {
        assert_eq!("name-asc".parse(), Ok(SortOption::NameAscending));
        assert_eq!("name-desc".parse(), Ok(SortOption::NameDescending));
        assert_eq!("date-newest".parse(), Ok(SortOption::DateNewest));
        assert_eq!("date-oldest".parse(), Ok(SortOption::DateOldest));
        assert_eq!("".parse(), Ok(SortOption::None));
    }

    #[test]
    fn rejects_unknown_value() {
        let err = "size".parse::<SortOption>().unwrap_err();
        assert_eq!(err, ParseSortOptionError("size".to_string()));
    }

    #[test]
    fn serde_uses_ui_values() {
        let json = serde_json::to_string(&SortOption::NameDescending).unwrap();
        assert_eq!(json, "\"name-desc\"");
        let parsed: SortOption = serde_json::from_str("\"date-newest\"").unwrap();
        assert_eq!(parsed, SortOption::DateNewest);
    }
}
