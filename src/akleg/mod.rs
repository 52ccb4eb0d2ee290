pub mod parser;
pub mod schema;

use derive_more::Display;

/// Origin of the roster pages; also the base for resolving relative profile links.
pub const BASE_URL: &str = "https://akleg.gov";
/// Title assigned to a member whose block carries no leadership position.
pub const DEFAULT_TITLE: &str = "Senator";
/// Region label stamped on every record.
pub const REGION: &str = "Alaska";
/// Status tag stamped on every record.
pub const MEMBER_STATUS: &str = "current";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Which roster page to fetch and which file to write.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Display)]
pub enum Chamber {
    #[default]
    #[display("senate")]
    Senate,
    #[display("house")]
    House,
}

impl Chamber {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "senate" => Some(Self::Senate),
            "house" => Some(Self::House),
            _ => None,
        }
    }

    /// A recognized `--chamber` value wins over bare tokens.
    /// Unrecognized input is ignored, leaving the default in effect.
    pub fn resolve(explicit: Option<&str>, tokens: &[String]) -> Self {
        explicit
            .and_then(Self::from_token)
            .or_else(|| tokens.iter().rev().find_map(|token| Self::from_token(token)))
            .unwrap_or_default()
    }

    pub fn page_path(self) -> &'static str {
        match self {
            Self::Senate => "/senate.php",
            Self::House => "/house.php",
        }
    }

    pub fn output_file(self) -> &'static str {
        match self {
            Self::Senate => "alaska_senate.json",
            Self::House => "alaska_house.json",
        }
    }
}
