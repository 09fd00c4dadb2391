//! Entry kind discriminator.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two kinds of catalog entries.
///
/// Each kind has its own closed set of required and optional fields;
/// see [`Field`](super::Field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A named pattern of structurally poor code.
    Smell,
    /// A named, mechanical code-transformation procedure.
    Technique,
}

impl EntryKind {
    /// Returns a static slice of both kinds, smells first.
    pub fn all() -> &'static [EntryKind] {
        &[EntryKind::Smell, EntryKind::Technique]
    }

    /// Lowercase noun used in diagnostics and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Smell => "smell",
            EntryKind::Technique => "technique",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "smell" | "smells" => Ok(EntryKind::Smell),
            "technique" | "techniques" => Ok(EntryKind::Technique),
            _ => Err(format!(
                "Invalid kind '{}'. Valid values: smell, technique",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("smell".parse::<EntryKind>().unwrap(), EntryKind::Smell);
        assert_eq!(
            "Techniques".parse::<EntryKind>().unwrap(),
            EntryKind::Technique
        );
        assert!("recipe".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntryKind::Smell.to_string(), "smell");
        assert_eq!(EntryKind::Technique.to_string(), "technique");
    }
}
