use crate::domain::tone::Tone;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub presence: Presence,
    pub role: String,
    pub email: String,
    pub workload: u8, // 0-100
    pub workload_status: WorkloadStatus, // Hardcoded per member, not derived from `workload`
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Presence {
    Online,
    Away,
    Offline,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkloadStatus {
    Available,
    Healthy,
    NearCapacity,
    Overloaded,
}

impl TeamMember {
    pub fn workload_percent(&self) -> u8 {
        self.workload.min(100)
    }
}

impl Presence {
    pub fn label(self) -> &'static str {
        match self {
            Presence::Online => "ONLINE",
            Presence::Away => "AWAY",
            Presence::Offline => "OFFLINE",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Presence::Online => Tone::Success,
            Presence::Away => Tone::Warning,
            Presence::Offline => Tone::Muted,
        }
    }
}

impl FromStr for Presence {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ONLINE" => Ok(Presence::Online),
            "AWAY" => Ok(Presence::Away),
            "OFFLINE" => Ok(Presence::Offline),
            _ => Err(AppError::unknown_label("presence", s)),
        }
    }
}

impl WorkloadStatus {
    pub fn label(self) -> &'static str {
        match self {
            WorkloadStatus::Available => "AVAILABLE",
            WorkloadStatus::Healthy => "HEALTHY",
            WorkloadStatus::NearCapacity => "NEAR CAPACITY",
            WorkloadStatus::Overloaded => "OVERLOADED",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            WorkloadStatus::Overloaded => Tone::Danger,
            WorkloadStatus::NearCapacity => Tone::Warning,
            WorkloadStatus::Healthy => Tone::Info,
            WorkloadStatus::Available => Tone::Success,
        }
    }
}

impl FromStr for WorkloadStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AVAILABLE" => Ok(WorkloadStatus::Available),
            "HEALTHY" => Ok(WorkloadStatus::Healthy),
            "NEAR CAPACITY" => Ok(WorkloadStatus::NearCapacity),
            "OVERLOADED" => Ok(WorkloadStatus::Overloaded),
            _ => Err(AppError::unknown_label("workload status", s)),
        }
    }
}

/// Presence dot color; unknown presence reads as offline.
pub fn presence_tone(label: &str) -> Tone {
    match label {
        "ONLINE" => Presence::Online.tone(),
        "AWAY" => Presence::Away.tone(),
        _ => Tone::Muted,
    }
}

/// Workload bar color; unknown statuses are muted.
pub fn workload_tone(label: &str) -> Tone {
    match label {
        "OVERLOADED" => WorkloadStatus::Overloaded.tone(),
        "NEAR CAPACITY" => WorkloadStatus::NearCapacity.tone(),
        "HEALTHY" => WorkloadStatus::Healthy.tone(),
        "AVAILABLE" => WorkloadStatus::Available.tone(),
        _ => Tone::Muted,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamStats {
    pub total_members: u32,
    pub avg_workload: u32,
    pub active_tasks: u32,
    pub full_capacity: u32,
}

/// Member of a task group, with an online indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub online: bool,
}

/// Per-person completion shown on the sub-admin portal.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffProgress {
    pub name: String,
    pub role: String,
    pub progress: u8,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_tone() {
        assert_eq!(presence_tone("ONLINE"), Tone::Success);
        assert_eq!(presence_tone("AWAY"), Tone::Warning);
        assert_eq!(presence_tone("OFFLINE"), Tone::Muted);
        assert_eq!(presence_tone("BUSY"), Tone::Muted);
        assert_eq!(presence_tone("online"), Tone::Muted);
    }

    #[test]
    fn test_workload_tone() {
        assert_eq!(workload_tone("OVERLOADED"), Tone::Danger);
        assert_eq!(workload_tone("NEAR CAPACITY"), Tone::Warning);
        assert_eq!(workload_tone("HEALTHY"), Tone::Info);
        assert_eq!(workload_tone("AVAILABLE"), Tone::Success);
        assert_eq!(workload_tone("ON LEAVE"), Tone::Muted);
    }
}
