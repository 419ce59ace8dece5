use promanage::domain::activity::activity_tone;
use promanage::domain::metrics::{detailed_progress_tone, stat_progress_tone};
use promanage::domain::project::{project_progress_tone, project_status_tone};
use promanage::domain::task::{category_tone, priority_tone, task_status_tone};
use promanage::domain::team::{presence_tone, workload_tone};
use promanage::domain::tone::Tone;
use rstest::rstest;

#[rstest]
#[case("HIGH", Tone::Danger)]
#[case("MEDIUM", Tone::Warning)]
#[case("MED", Tone::Warning)]
#[case("LOW", Tone::Neutral)]
#[case("URGENT", Tone::Neutral)]
#[case("", Tone::Neutral)]
#[case("high", Tone::Neutral)]
#[case(" HIGH ", Tone::Neutral)]
#[case("Med", Tone::Neutral)]
fn test_priority_tone(#[case] label: &str, #[case] expected: Tone) {
    assert_eq!(priority_tone(label), expected);
    assert_eq!(priority_tone(label), priority_tone(label));
}

#[rstest]
#[case("ACTIVE", Tone::Success)]
#[case("ON HOLD", Tone::Warning)]
#[case("COMPLETED", Tone::Primary)]
#[case("ARCHIVED", Tone::Neutral)]
#[case("active", Tone::Neutral)]
#[case("On Hold", Tone::Neutral)]
fn test_project_status_tone(#[case] label: &str, #[case] expected: Tone) {
    assert_eq!(project_status_tone(label), expected);
}

#[rstest]
#[case("ACTIVE", Tone::Primary)]
#[case("ON HOLD", Tone::Warning)]
#[case("COMPLETED", Tone::Success)]
#[case("ARCHIVED", Tone::Muted)]
fn test_project_progress_tone(#[case] label: &str, #[case] expected: Tone) {
    assert_eq!(project_progress_tone(label), expected);
}

#[rstest]
#[case("In Progress", Tone::Primary)]
#[case("Done", Tone::Success)]
#[case("Review", Tone::Purple)]
#[case("To Do", Tone::Neutral)]
#[case("Urgent", Tone::Neutral)]
#[case("Blocked", Tone::Neutral)]
fn test_task_status_tone(#[case] label: &str, #[case] expected: Tone) {
    assert_eq!(task_status_tone(label), expected);
}

#[rstest]
#[case("update", Tone::Primary)]
#[case("comment", Tone::Orange)]
#[case("change", Tone::Purple)]
#[case("create", Tone::Success)]
#[case("deploy", Tone::Success)]
fn test_activity_tone(#[case] kind: &str, #[case] expected: Tone) {
    assert_eq!(activity_tone(kind), expected);
}

#[rstest]
#[case("ONLINE", Tone::Success)]
#[case("AWAY", Tone::Warning)]
#[case("OFFLINE", Tone::Muted)]
#[case("INVISIBLE", Tone::Muted)]
fn test_presence_tone(#[case] label: &str, #[case] expected: Tone) {
    assert_eq!(presence_tone(label), expected);
}

#[rstest]
#[case("OVERLOADED", Tone::Danger)]
#[case("NEAR CAPACITY", Tone::Warning)]
#[case("HEALTHY", Tone::Info)]
#[case("AVAILABLE", Tone::Success)]
#[case("ON LEAVE", Tone::Muted)]
fn test_workload_tone(#[case] label: &str, #[case] expected: Tone) {
    assert_eq!(workload_tone(label), expected);
}

#[rstest]
#[case("DESIGN", Tone::Purple)]
#[case("DEV", Tone::Primary)]
#[case("QA", Tone::Success)]
fn test_category_tone(#[case] category: &str, #[case] expected: Tone) {
    assert_eq!(category_tone(category), expected);
}

#[rstest]
#[case(100, Tone::Success)]
#[case(68, Tone::Primary)]
#[case(1, Tone::Primary)]
#[case(0, Tone::Muted)]
fn test_detailed_progress_tone(#[case] progress: u8, #[case] expected: Tone) {
    assert_eq!(detailed_progress_tone(progress), expected);
}

#[test]
fn test_stat_progress_tone() {
    assert_eq!(stat_progress_tone(68), Tone::Success);
    assert_eq!(stat_progress_tone(25), Tone::Warning);
}
