use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Links,
    Images,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::Links, SearchMode::Images];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Links => "links",
            SearchMode::Images => "images",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "links" => Ok(SearchMode::Links),
            "images" => Ok(SearchMode::Images),
            other => anyhow::bail!("Unknown search mode: {}", other),
        }
    }
}
