use crate::domain::tone::Tone;

/// Direction of the change shown under a stat card's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn tone(self) -> Tone {
        match self {
            Trend::Up => Tone::Success,
            Trend::Down => Tone::Danger,
            Trend::Flat => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: Option<String>,
    pub trend: Trend,
}

impl StatCard {
    pub fn new(title: &str, value: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            change: None,
            trend: Trend::Flat,
        }
    }

    pub fn with_change(mut self, change: &str, trend: Trend) -> Self {
        self.change = Some(change.to_string());
        self.trend = trend;
        self
    }
}

/// Stat tile on the sub-admin portal; some carry a progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub card: StatCard,
    pub icon: String,
    pub tint: Tone,
    pub progress: Option<u8>,
}

/// Bars above 60% read as healthy.
pub fn stat_progress_tone(progress: u8) -> Tone {
    if progress > 60 {
        Tone::Success
    } else {
        Tone::Warning
    }
}

/// A work item and how far along it is.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedTask {
    pub id: u32,
    pub title: String,
    pub team: String,
    pub progress: u8,
    pub status: String,
    pub icon: String,
}

impl DetailedTask {
    pub fn tone(&self) -> Tone {
        detailed_progress_tone(self.progress)
    }
}

/// Finished work is green, started work is primary, untouched work is muted.
pub fn detailed_progress_tone(progress: u8) -> Tone {
    match progress {
        100..=u8::MAX => Tone::Success,
        1..=99 => Tone::Primary,
        0 => Tone::Muted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_progress_tone_threshold() {
        assert_eq!(stat_progress_tone(68), Tone::Success);
        assert_eq!(stat_progress_tone(61), Tone::Success);
        assert_eq!(stat_progress_tone(60), Tone::Warning);
        assert_eq!(stat_progress_tone(25), Tone::Warning);
    }

    #[test]
    fn test_detailed_progress_tone() {
        assert_eq!(detailed_progress_tone(100), Tone::Success);
        assert_eq!(detailed_progress_tone(68), Tone::Primary);
        assert_eq!(detailed_progress_tone(1), Tone::Primary);
        assert_eq!(detailed_progress_tone(0), Tone::Muted);
    }

    #[test]
    fn test_stat_card_builder() {
        let card = StatCard::new("TOTAL TASKS", "124").with_change("+5%", Trend::Up);
        assert_eq!(card.change.as_deref(), Some("+5%"));
        assert_eq!(card.trend.tone(), Tone::Success);

        let plain = StatCard::new("Active Sprints", "4");
        assert!(plain.change.is_none());
        assert_eq!(plain.trend, Trend::Flat);
    }
}
