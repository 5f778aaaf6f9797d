//! Form field identifiers.

use serde::{Deserialize, Serialize};

/// Named input of the membership form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Applicant's full name.
    FullName,
    /// YouTube channel name.
    YoutubeName,
    /// Gmail address.
    Gmail,
    /// Optional free-text suggestions.
    Suggestions,
}

impl FormField {
    /// All fields in display and validation order.
    pub const ALL: [Self; 4] = [
        Self::FullName,
        Self::YoutubeName,
        Self::Gmail,
        Self::Suggestions,
    ];

    /// Returns the wire name used in payloads.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::YoutubeName => "youtubeName",
            Self::Gmail => "gmail",
            Self::Suggestions => "suggestions",
        }
    }

    /// Returns whether a value is mandatory.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Suggestions)
    }

    /// Returns the field label shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name *",
            Self::YoutubeName => "YouTube Channel Name *",
            Self::Gmail => "Gmail Address *",
            Self::Suggestions => "Suggestions & Comments",
        }
    }

    /// Returns the placeholder shown while the field is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::YoutubeName => "Your YouTube channel name",
            Self::Gmail => "yourname@gmail.com",
            Self::Suggestions => "Share any suggestions or comments (optional)",
        }
    }

    /// Returns the next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::FullName => Self::YoutubeName,
            Self::YoutubeName => Self::Gmail,
            Self::Gmail => Self::Suggestions,
            Self::Suggestions => Self::FullName,
        }
    }

    /// Returns the previous field, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::FullName => Self::Suggestions,
            Self::YoutubeName => Self::FullName,
            Self::Gmail => Self::YoutubeName,
            Self::Suggestions => Self::Gmail,
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
