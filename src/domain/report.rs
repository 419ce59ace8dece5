use crate::domain::metrics::{StatCard, Trend};
use crate::domain::tone::Tone;
use std::f32::consts::PI;

/// Radius of the distribution donut, in SVG user units.
pub const DONUT_RADIUS: f32 = 40.0;

pub fn donut_circumference() -> f32 {
    2.0 * PI * DONUT_RADIUS
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportStats {
    pub total_completed: u32,
    pub completed_change: String,
    pub active_sprints: u32,
    pub sprint_change: String,
    pub avg_cycle_days: f32,
    pub cycle_change: String,
    pub team_efficiency: u32,
    pub efficiency_change: String,
}

impl ReportStats {
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Tasks Completed", group_thousands(self.total_completed))
                .with_change(&self.completed_change, Trend::Up),
            StatCard::new("Active Sprints", self.active_sprints.to_string())
                .with_change(&self.sprint_change, Trend::Flat),
            StatCard::new("Avg. Cycle Time", format!("{} days", self.avg_cycle_days))
                .with_change(&self.cycle_change, Trend::Up),
            StatCard::new("Team Efficiency", format!("{}%", self.team_efficiency))
                .with_change(&self.efficiency_change, Trend::Flat),
        ]
    }
}

/// Completed tasks for one point on the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyCount {
    pub label: String,
    pub count: u32,
}

/// Bar heights as a percentage of the tallest bar.
pub fn bar_heights(series: &[WeeklyCount]) -> Vec<f32> {
    let max = series.iter().map(|point| point.count).max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; series.len()];
    }
    series
        .iter()
        .map(|point| point.count as f32 / max as f32 * 100.0)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDistribution {
    pub done: u32,
    pub in_progress: u32,
    pub to_do: u32,
    pub blocked: u32,
}

impl TaskDistribution {
    pub fn total(&self) -> u32 {
        self.done + self.in_progress + self.to_do + self.blocked
    }

    /// Legend rows in drawing order.
    pub fn entries(&self) -> [(&'static str, u32, Tone); 4] {
        [
            ("Done", self.done, Tone::Success),
            ("In Progress", self.in_progress, Tone::Primary),
            ("To Do", self.to_do, Tone::Muted),
            ("Blocked", self.blocked, Tone::Danger),
        ]
    }

    /// Stroke segments for the donut, laid end to end around the circle.
    pub fn donut_segments(&self) -> Vec<DonutSegment> {
        let total = self.total();
        let circumference = donut_circumference();
        let mut drawn = 0.0;

        self.entries()
            .into_iter()
            .map(|(label, value, tone)| {
                let length = if total == 0 {
                    0.0
                } else {
                    value as f32 / total as f32 * circumference
                };
                let segment = DonutSegment {
                    label,
                    value,
                    tone,
                    length,
                    offset: -drawn,
                };
                drawn += length;
                segment
            })
            .collect()
    }
}

/// One arc of the donut, expressed as SVG dash parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub label: &'static str,
    pub value: u32,
    pub tone: Tone,
    pub length: f32,
    pub offset: f32,
}

impl DonutSegment {
    pub fn dasharray(&self) -> String {
        format!("{:.2} {:.2}", self.length, donut_circumference())
    }

    pub fn dashoffset(&self) -> String {
        format!("{:.2}", self.offset)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberProductivity {
    pub name: String,
    pub tasks: u32,
    pub percentage: u8,
}

/// Comma-grouped integer: 1284 -> "1,284".
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(count: u32) -> WeeklyCount {
        WeeklyCount {
            label: "OCT 01".to_string(),
            count,
        }
    }

    #[test]
    fn test_bar_heights_relative_to_max() {
        let heights = bar_heights(&[point(50), point(200), point(100)]);
        assert_eq!(heights, vec![25.0, 100.0, 50.0]);
    }

    #[test]
    fn test_bar_heights_degenerate_series() {
        assert!(bar_heights(&[]).is_empty());
        assert_eq!(bar_heights(&[point(0), point(0)]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1284), "1,284");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_donut_segments_cover_circle() {
        let distribution = TaskDistribution {
            done: 184,
            in_progress: 120,
            to_do: 88,
            blocked: 20,
        };
        assert_eq!(distribution.total(), 412);

        let segments = distribution.donut_segments();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].offset, 0.0);

        let drawn: f32 = segments.iter().map(|s| s.length).sum();
        assert!((drawn - donut_circumference()).abs() < 0.01);

        // Each segment starts where the previous one ended
        for pair in segments.windows(2) {
            let expected = pair[0].offset - pair[0].length;
            assert!((pair[1].offset - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_donut_segments_with_no_tasks() {
        let empty = TaskDistribution {
            done: 0,
            in_progress: 0,
            to_do: 0,
            blocked: 0,
        };
        assert!(empty.donut_segments().iter().all(|s| s.length == 0.0));
    }

    #[test]
    fn test_report_cards() {
        let stats = ReportStats {
            total_completed: 1284,
            completed_change: "+17%".to_string(),
            active_sprints: 4,
            sprint_change: "Ongoing".to_string(),
            avg_cycle_days: 3.2,
            cycle_change: "-5%".to_string(),
            team_efficiency: 94,
            efficiency_change: "Stable".to_string(),
        };
        let cards = stats.cards();
        assert_eq!(cards[0].value, "1,284");
        assert_eq!(cards[2].value, "3.2 days");
        assert_eq!(cards[3].value, "94%");
    }
}
