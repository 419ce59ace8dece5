use crate::domain::tone::Tone;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Team avatars shown on a card before collapsing into a "+N" chip.
pub const MAX_VISIBLE_TEAM: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub progress: u8, // 0-100
    pub team: Vec<String>, // Initials
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Active,
    OnHold,
    Completed,
}

impl Project {
    /// Progress clamped to a valid bar width.
    pub fn progress_percent(&self) -> u8 {
        self.progress.min(100)
    }

    pub fn visible_team(&self) -> &[String] {
        let end = self.team.len().min(MAX_VISIBLE_TEAM);
        &self.team[..end]
    }

    /// Members hidden behind the overflow chip, if any.
    pub fn team_overflow(&self) -> Option<usize> {
        self.team
            .len()
            .checked_sub(MAX_VISIBLE_TEAM)
            .filter(|hidden| *hidden > 0)
    }
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::OnHold => "ON HOLD",
            ProjectStatus::Completed => "COMPLETED",
        }
    }

    pub fn badge_tone(self) -> Tone {
        match self {
            ProjectStatus::Active => Tone::Success,
            ProjectStatus::OnHold => Tone::Warning,
            ProjectStatus::Completed => Tone::Primary,
        }
    }

    pub fn progress_tone(self) -> Tone {
        match self {
            ProjectStatus::Active => Tone::Primary,
            ProjectStatus::OnHold => Tone::Warning,
            ProjectStatus::Completed => Tone::Success,
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(ProjectStatus::Active),
            "ON HOLD" => Ok(ProjectStatus::OnHold),
            "COMPLETED" => Ok(ProjectStatus::Completed),
            _ => Err(AppError::unknown_label("project status", s)),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Status as printed on the card badge. No case folding.
fn status_from_badge(label: &str) -> Option<ProjectStatus> {
    match label {
        "ACTIVE" => Some(ProjectStatus::Active),
        "ON HOLD" => Some(ProjectStatus::OnHold),
        "COMPLETED" => Some(ProjectStatus::Completed),
        _ => None,
    }
}

/// Badge tone for a project status label; unknown statuses are neutral.
pub fn project_status_tone(label: &str) -> Tone {
    status_from_badge(label)
        .map(ProjectStatus::badge_tone)
        .unwrap_or(Tone::Neutral)
}

/// Progress bar tone for a project status label; unknown statuses are muted.
pub fn project_progress_tone(label: &str) -> Tone {
    status_from_badge(label)
        .map(ProjectStatus::progress_tone)
        .unwrap_or(Tone::Muted)
}

pub fn count_with_status(projects: &[Project], status: ProjectStatus) -> usize {
    projects.iter().filter(|p| p.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_team(team: &[&str]) -> Project {
        Project {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            status: ProjectStatus::Active,
            progress: 50,
            team: team.iter().map(|m| m.to_string()).collect(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_team_overflow() {
        let small = project_with_team(&["AB", "CD"]);
        assert_eq!(small.visible_team().len(), 2);
        assert_eq!(small.team_overflow(), None);

        let exact = project_with_team(&["AB", "CD", "EF"]);
        assert_eq!(exact.visible_team().len(), 3);
        assert_eq!(exact.team_overflow(), None);

        let large = project_with_team(&["AB", "CD", "EF", "GH", "IJ"]);
        assert_eq!(large.visible_team(), &["AB", "CD", "EF"]);
        assert_eq!(large.team_overflow(), Some(2));
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut project = project_with_team(&[]);
        project.progress = 140;
        assert_eq!(project.progress_percent(), 100);
    }

    #[test]
    fn test_progress_tone() {
        assert_eq!(project_progress_tone("ACTIVE"), Tone::Primary);
        assert_eq!(project_progress_tone("ON HOLD"), Tone::Warning);
        assert_eq!(project_progress_tone("COMPLETED"), Tone::Success);
        assert_eq!(project_progress_tone("ARCHIVED"), Tone::Muted);
        assert_eq!(project_progress_tone("active"), Tone::Muted);
    }

    #[test]
    fn test_status_tone_is_case_sensitive() {
        assert_eq!(project_status_tone("ACTIVE"), Tone::Success);
        assert_eq!(project_status_tone("active"), Tone::Neutral);
        assert_eq!(project_status_tone(" ON HOLD"), Tone::Neutral);
    }

    #[test]
    fn test_count_with_status() {
        let mut on_hold = project_with_team(&[]);
        on_hold.status = ProjectStatus::OnHold;
        let projects = vec![project_with_team(&[]), on_hold, project_with_team(&[])];
        assert_eq!(count_with_status(&projects, ProjectStatus::Active), 2);
        assert_eq!(count_with_status(&projects, ProjectStatus::Completed), 0);
    }
}
