use crate::domain::tone::Tone;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Someone shown with a name and an initials avatar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub name: String,
    pub avatar: String,
}

impl Person {
    pub fn new(name: &str, avatar: &str) -> Self {
        Self {
            name: name.to_string(),
            avatar: avatar.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub user: Person,
    pub action: String,
    pub target: String,
    pub timestamp: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Update,
    Comment,
    Change,
    Create,
}

impl ActivityKind {
    pub fn tone(self) -> Tone {
        match self {
            ActivityKind::Update => Tone::Primary,
            ActivityKind::Comment => Tone::Orange,
            ActivityKind::Change => Tone::Purple,
            ActivityKind::Create => Tone::Success,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "update" => Ok(ActivityKind::Update),
            "comment" => Ok(ActivityKind::Comment),
            "change" => Ok(ActivityKind::Change),
            "create" => Ok(ActivityKind::Create),
            _ => Err(AppError::unknown_label("activity type", s)),
        }
    }
}

/// Dot color for an activity type; anything unrecognised reads as a creation.
pub fn activity_tone(kind: &str) -> Tone {
    match kind {
        "update" => ActivityKind::Update.tone(),
        "comment" => ActivityKind::Comment.tone(),
        "change" => ActivityKind::Change.tone(),
        _ => Tone::Success,
    }
}

/// A message in a discussion thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author: Person,
    pub message: String,
    pub timestamp: String,
    pub highlighted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_tone() {
        assert_eq!(activity_tone("update"), Tone::Primary);
        assert_eq!(activity_tone("comment"), Tone::Orange);
        assert_eq!(activity_tone("change"), Tone::Purple);
        assert_eq!(activity_tone("create"), Tone::Success);
        assert_eq!(activity_tone("deleted"), Tone::Success);
        assert_eq!(activity_tone("Update"), Tone::Success);
    }

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!("Update".parse::<ActivityKind>().unwrap(), ActivityKind::Update);
        assert!("upload".parse::<ActivityKind>().is_err());
    }
}
