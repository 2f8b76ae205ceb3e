//! Display language selection.

use serde::{Deserialize, Serialize};

/// The two languages the storefront renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Tamil.
    Ta,
}

impl Language {
    /// Parse a language code, falling back to English for anything
    /// unrecognised.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "ta" => Self::Ta,
            _ => Self::En,
        }
    }

    /// The two-letter code used in URLs (`?lang=ta`).
    #[must_use]
    pub const fn as_code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ta => "ta",
        }
    }

    /// The other language, for the header toggle link.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Ta,
            Self::Ta => Self::En,
        }
    }
}
