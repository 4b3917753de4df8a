use serde::{Deserialize, Serialize};

/// One of the two supported competitive-programming platforms.
///
/// Serializes to the lowercase wire name used in URL paths and export
/// file names (`"leetcode"` / `"codechef"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Leetcode,
    Codechef,
}

impl Platform {
    /// The lowercase identifier used in routes and file names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Leetcode => "leetcode",
            Platform::Codechef => "codechef",
        }
    }

    /// Human-readable platform name for card titles.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Leetcode => "LeetCode",
            Platform::Codechef => "CodeChef",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leetcode" => Ok(Platform::Leetcode),
            "codechef" => Ok(Platform::Codechef),
            other => Err(UnknownPlatform(other.to_owned())),
        }
    }
}

/// Error returned when parsing an unrecognized platform identifier.
#[derive(Debug, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("leetcode".parse::<Platform>().unwrap(), Platform::Leetcode);
        assert_eq!("codechef".parse::<Platform>().unwrap(), Platform::Codechef);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "topcoder".parse::<Platform>().unwrap_err();
        assert_eq!(err.to_string(), "unknown platform: topcoder");
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(Platform::Leetcode.to_string(), "leetcode");
        assert_eq!(Platform::Codechef.to_string(), "codechef");
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&Platform::Codechef).unwrap();
        assert_eq!(json, "\"codechef\"");
    }
}
