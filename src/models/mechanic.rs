use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::vocabulary::{Vocabulary, GO_VOCABULARY, JS_VOCABULARY, STANDARD_VOCABULARY};
use crate::error::LabError;

/// The style of note being generated.
///
/// - `Standard`: The full mechanic write-up, the default.
/// - `Js`: A short browser/canvas prototype sketch.
/// - `Go`: A short Go prototype sketch.
///
/// Each flavor has its own vocabulary, body template and filename suffix.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    #[default]
    Standard,
    Js,
    Go,
}

impl Flavor {
    pub const ALL: [Flavor; 3] = [Flavor::Standard, Flavor::Js, Flavor::Go];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Js => "js",
            Self::Go => "go",
        }
    }

    pub fn vocabulary(&self) -> &'static Vocabulary {
        match self {
            Self::Standard => &STANDARD_VOCABULARY,
            Self::Js => &JS_VOCABULARY,
            Self::Go => &GO_VOCABULARY,
        }
    }

    /// Text between the slug and the `.md` extension.
    fn suffix(&self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Js => "-js-note",
            Self::Go => "-go-note",
        }
    }

    /// Build the dated filename for a slug, e.g. `2024-01-15-invert-gravity-roguelike.md`.
    pub fn filename(&self, date: &str, slug: &str) -> String {
        format!("{}-{}{}.md", date, slug, self.suffix())
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "js" => Ok(Self::Js),
            "go" => Ok(Self::Go),
            other => Err(LabError::UnknownFlavor(other.to_string())),
        }
    }
}

/// The phrases drawn for one run, one per vocabulary slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub theme: &'static str,
    pub genre: &'static str,
    pub action: &'static str,
    pub constraint: &'static str,
    pub twist: &'static str,
    /// Drawn implementation note. Only present for flavors that have one.
    pub note: Option<&'static str>,
}

/// A composed game-mechanic note.
///
/// The title, slug and filename are derived from the selection and the date;
/// the body is the rendered markdown written to `mechanics/<filename>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MechanicDocument {
    pub flavor: Flavor,
    /// Title-cased "<action> <genre>", e.g. "Invert Gravity Roguelike".
    pub title: String,
    pub date: NaiveDate,
    pub slug: String,
    pub filename: String,
    pub selection: Selection,
    #[serde(skip)]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames_per_flavor() {
        assert_eq!(
            Flavor::Standard.filename("2024-01-15", "invert-gravity-roguelike"),
            "2024-01-15-invert-gravity-roguelike.md"
        );
        assert_eq!(
            Flavor::Js.filename("2024-01-15", "rewind-only-projectiles-grid-puzzle"),
            "2024-01-15-rewind-only-projectiles-grid-puzzle-js-note.md"
        );
        assert_eq!(
            Flavor::Go.filename("2024-01-15", "co-op"),
            "2024-01-15-co-op-go-note.md"
        );
    }

    #[test]
    fn test_parse_flavor() {
        assert_eq!("go".parse::<Flavor>().unwrap(), Flavor::Go);
        assert_eq!(Flavor::Js.to_string(), "js");
        assert!(matches!(
            "python".parse::<Flavor>(),
            Err(LabError::UnknownFlavor(name)) if name == "python"
        ));
    }
}
