//! Hardcoded records standing in for backend data. Every page reads its
//! fixtures from here; nothing is ever mutated or persisted.

use crate::domain::activity::{Activity, ActivityKind, Comment, Person};
use crate::domain::calendar::{CalendarMonth, CalendarTask, UnscheduledTask};
use crate::domain::metrics::{DetailedTask, StatCard, StatTile, Trend};
use crate::domain::project::{Project, ProjectStatus};
use crate::domain::report::{MemberProductivity, ReportStats, TaskDistribution, WeeklyCount};
use crate::domain::settings::{Integration, Invoice, NotificationPreference, PaymentMethod};
use crate::domain::task::{ActiveTask, CompletionStats, Priority, Task, TaskStatus};
use crate::domain::team::{GroupMember, Presence, StaffProgress, TeamMember, TeamStats, WorkloadStatus};
use crate::domain::tone::Tone;
use crate::error::Result;
use chrono::NaiveDate;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

// Dashboard

/// The fixed "today" every page is rendered against.
pub fn today() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2023, 10, 23)
}

pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("TOTAL TASKS", "124").with_change("+5%", Trend::Up),
        StatCard::new("IN PROGRESS", "12").with_change("+2%", Trend::Up),
        StatCard::new("COMPLETED", "84").with_change("-1%", Trend::Down),
    ]
}

pub fn team_velocity() -> StatCard {
    StatCard::new("TEAM VELOCITY", "92%").with_change("↑ +8%", Trend::Up)
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            user: Person::new("Sarah Williams", "SW"),
            action: "updated".to_string(),
            target: "API Documentation".to_string(),
            timestamp: "2 hours ago".to_string(),
            kind: ActivityKind::Update,
        },
        Activity {
            id: 2,
            user: Person::new("Mike Chen", "MC"),
            action: "commented on".to_string(),
            target: "Landing Page Redesign".to_string(),
            timestamp: "4 hours ago".to_string(),
            kind: ActivityKind::Comment,
        },
        Activity {
            id: 3,
            user: Person::new("James Miller", "JM"),
            action: "changed priority of".to_string(),
            target: "Database Migration".to_string(),
            timestamp: "Yesterday at 3:30 PM".to_string(),
            kind: ActivityKind::Change,
        },
        Activity {
            id: 4,
            user: Person::new("Elena Rodriguez", "ER"),
            action: "created new task".to_string(),
            target: "Brand Style Guide".to_string(),
            timestamp: "Oct 21 at 10:15 AM".to_string(),
            kind: ActivityKind::Create,
        },
    ]
}

pub fn my_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            name: "Design System Audit".to_string(),
            category: "Internal Marketing".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            due_date: "Oct 25, 2023".to_string(),
            ..Default::default()
        },
        Task {
            id: 2,
            name: "User Interview Summary".to_string(),
            category: "UX Research".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: "Oct 28, 2023".to_string(),
            ..Default::default()
        },
        Task {
            id: 3,
            name: "Bug Fix: Login Modal".to_string(),
            category: "Core Features".to_string(),
            status: TaskStatus::Done,
            priority: Priority::High,
            due_date: "Oct 22, 2023".to_string(),
            ..Default::default()
        },
        Task {
            id: 4,
            name: "Quarterly Team Sync".to_string(),
            category: "Management".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Low,
            due_date: "Nov 02, 2023".to_string(),
            ..Default::default()
        },
    ]
}

// Projects

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Q4 Marketing Campaign".to_string(),
            description: "Developing cross-channel strategies for year-end growth and customer acquisition.".to_string(),
            status: ProjectStatus::Active,
            progress: 85,
            team: strings(&["SW", "MC", "ER"]),
            updated_at: "Updated 1h ago".to_string(),
        },
        Project {
            id: 2,
            title: "iOS App Redesign".to_string(),
            description: "Complete overhaul of the user experience for iOS and Android platforms.".to_string(),
            status: ProjectStatus::OnHold,
            progress: 20,
            team: strings(&["JM", "SW"]),
            updated_at: "Updated 1d ago".to_string(),
        },
        Project {
            id: 3,
            title: "Annual Audit 2023".to_string(),
            description: "Year-end financial and compliance review for the fiscal year 2023.".to_string(),
            status: ProjectStatus::Completed,
            progress: 100,
            team: strings(&["ER"]),
            updated_at: "Completed Oct 20".to_string(),
        },
        Project {
            id: 4,
            title: "Customer Portal Update".to_string(),
            description: "Improving self-service tools for enterprise clients and billing transparency.".to_string(),
            status: ProjectStatus::Active,
            progress: 45,
            team: strings(&["MC", "JM", "SW"]),
            updated_at: "Updated 3h ago".to_string(),
        },
        Project {
            id: 5,
            title: "Social Media Assets".to_string(),
            description: "Standard templates and brand assets for multi-channel distribution.".to_string(),
            status: ProjectStatus::Active,
            progress: 62,
            team: strings(&["ER", "MC"]),
            updated_at: "Updated 5h ago".to_string(),
        },
    ]
}

// Tasks

pub fn completion_stats() -> CompletionStats {
    CompletionStats {
        completed: 24,
        in_progress: 9,
        remaining: 4,
        total: 37,
        percentage: 65,
    }
}

pub fn task_list() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            name: "Design System Audit & Update".to_string(),
            category: "Finance • #TSK-10-24".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            due_date: "Oct 24, 2023".to_string(),
            assignees: strings(&["AB", "CD"]),
            overdue: false,
        },
        Task {
            id: 2,
            name: "API Integration for Payment Gateway".to_string(),
            category: "Marketing • #TSK-10-39".to_string(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: "Oct 28, 2023".to_string(),
            assignees: strings(&["EF"]),
            overdue: false,
        },
        Task {
            id: 3,
            name: "Drafting Q4 Budget Proposal".to_string(),
            category: "Finance • #TSK-11-01".to_string(),
            status: TaskStatus::Done,
            priority: Priority::Low,
            due_date: "Oct 15, 2023".to_string(),
            assignees: strings(&["GH"]),
            overdue: false,
        },
        Task {
            id: 4,
            name: "Security Vulnerability Patch v2.3".to_string(),
            category: "Security • #TSK-10-25".to_string(),
            status: TaskStatus::Urgent,
            priority: Priority::High,
            due_date: "Overdue".to_string(),
            assignees: Vec::new(),
            overdue: true,
        },
        Task {
            id: 5,
            name: "Marketing Copy for Landing Page".to_string(),
            category: "Content • #TSK-SD-231".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::Medium,
            due_date: "Nov 02, 2023".to_string(),
            assignees: strings(&["IJ", "KL"]),
            overdue: false,
        },
    ]
}

// Calendar

pub fn calendar_month() -> Result<CalendarMonth> {
    CalendarMonth::new(2023, 10)
}

pub const CALENDAR_TODAY: u32 = 23;

pub fn calendar_tasks() -> Vec<CalendarTask> {
    let task = |id: u32, title: &str, date: u32, color: Tone, assignee: &str| CalendarTask {
        id,
        title: title.to_string(),
        date,
        color,
        assignee: assignee.to_string(),
    };
    vec![
        task(1, "Q4 Planning", 1, Tone::Success, "AB"),
        task(2, "Review Wireframe", 4, Tone::Info, "CD"),
        task(3, "Product Demo", 5, Tone::Warning, "EF"),
        task(4, "Team Sync", 5, Tone::Warning, "GH"),
        task(5, "Frontend Implementation - Sprint", 9, Tone::Info, "IJ"),
        task(6, "Bug Bash: Mobile Api", 17, Tone::Danger, "KL"),
    ]
}

pub fn unscheduled_tasks() -> Vec<UnscheduledTask> {
    let task = |id: u32, title: &str, priority: Priority, assignee: &str, estimate: &str| {
        UnscheduledTask {
            id,
            title: title.to_string(),
            priority,
            assignee: assignee.to_string(),
            estimate: estimate.to_string(),
        }
    };
    vec![
        task(1, "Update API Documentation", Priority::High, "John D.", "2h"),
        task(2, "Asset Cleanup", Priority::Medium, "Sarah K.", "4h"),
        task(3, "Internal Newsletter", Priority::Low, "Mike T.", "1h"),
        task(4, "Database Migration", Priority::High, "Alex B.", "2h"),
    ]
}

// Team

pub fn team_stats() -> TeamStats {
    TeamStats {
        total_members: 32,
        avg_workload: 64,
        active_tasks: 148,
        full_capacity: 5,
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: 1,
            name: "Alex Rivera".to_string(),
            presence: Presence::Online,
            role: "Senior Designer".to_string(),
            email: "alex@company.com".to_string(),
            workload: 88,
            workload_status: WorkloadStatus::NearCapacity,
            avatar: "AR".to_string(),
        },
        TeamMember {
            id: 2,
            name: "Jordan Smith".to_string(),
            presence: Presence::Online,
            role: "Full Stack Dev".to_string(),
            email: "jordan@company.com".to_string(),
            workload: 40,
            workload_status: WorkloadStatus::Healthy,
            avatar: "JS".to_string(),
        },
        TeamMember {
            id: 3,
            name: "Sarah Chen".to_string(),
            presence: Presence::Online,
            role: "Product Manager".to_string(),
            email: "sarah@company.com".to_string(),
            workload: 96,
            workload_status: WorkloadStatus::Overloaded,
            avatar: "SC".to_string(),
        },
        TeamMember {
            id: 4,
            name: "Taylor Swift".to_string(),
            presence: Presence::Offline,
            role: "QA Engineer".to_string(),
            email: "taylor@company.com".to_string(),
            workload: 20,
            workload_status: WorkloadStatus::Available,
            avatar: "TS".to_string(),
        },
    ]
}

// Reports

pub fn report_stats() -> ReportStats {
    ReportStats {
        total_completed: 1284,
        completed_change: "+17%".to_string(),
        active_sprints: 4,
        sprint_change: "Ongoing".to_string(),
        avg_cycle_days: 3.2,
        cycle_change: "-5%".to_string(),
        team_efficiency: 94,
        efficiency_change: "Stable".to_string(),
    }
}

pub fn tasks_over_time() -> Vec<WeeklyCount> {
    [
        ("OCT 01", 85),
        ("OCT 08", 120),
        ("OCT 15", 95),
        ("OCT 18", 160),
        ("OCT 20", 140),
        ("OCT 23", 185),
        ("OCT 25", 210),
        ("OCT 28", 155),
        ("OCT 30", 90),
        ("OCT 31", 180),
    ]
    .into_iter()
    .map(|(label, count)| WeeklyCount {
        label: label.to_string(),
        count,
    })
    .collect()
}

pub fn task_distribution() -> TaskDistribution {
    TaskDistribution {
        done: 184,
        in_progress: 120,
        to_do: 88,
        blocked: 20,
    }
}

pub fn member_productivity() -> Vec<MemberProductivity> {
    vec![MemberProductivity {
        name: "Sarah Connor".to_string(),
        tasks: 48,
        percentage: 100,
    }]
}

// Settings

pub const TIMEZONES: [&str; 3] = [
    "(GMT-08:00) Pacific Time (US & Canada)",
    "(GMT-05:00) Eastern Time (US & Canada)",
    "(GMT+00:00) London",
];

pub const DATE_FORMATS: [&str; 3] = ["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"];

pub fn notification_preferences() -> Vec<NotificationPreference> {
    let pref = |trigger: &str, description: &str, email: bool, desktop: bool, mobile: bool| {
        NotificationPreference {
            trigger: trigger.to_string(),
            description: description.to_string(),
            email,
            desktop,
            mobile,
        }
    };
    vec![
        pref("New Task Assigned", "When someone assigns a new task to you", true, true, true),
        pref("Mention in Comments", "When someone @mentions you in a task or project", true, true, true),
        pref("Due Date Reminder", "Get notified before a task is deadline", true, false, true),
        pref("Project Updates", "Changes to status, priority, or milestones", false, true, false),
        pref("Weekly Summary", "A high-level view of tasks, weekly recap of progress", true, false, false),
    ]
}

pub fn invoices() -> Vec<Invoice> {
    ["May 15, 2024", "Apr 15, 2024", "Mar 15, 2024"]
        .into_iter()
        .map(|date| Invoice {
            date: date.to_string(),
            description: "Pro Plan Monthly".to_string(),
            amount: "$49.00".to_string(),
            status: "Paid".to_string(),
        })
        .collect()
}

pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            brand: "Visa".to_string(),
            last4: "4242".to_string(),
            expiry: "12/2025".to_string(),
            is_default: true,
        },
        PaymentMethod {
            brand: "Mastercard".to_string(),
            last4: "8888".to_string(),
            expiry: "06/2024".to_string(),
            is_default: false,
        },
    ]
}

pub fn integrations() -> Vec<Integration> {
    let app = |name: &str, icon: &str, description: &str, connected: bool| Integration {
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        connected,
    };
    vec![
        app("Slack", "💬", "Send task updates, notifications, and reports directly to your team channels.", true),
        app("Google Drive", "📂", "Attach files from Drive to your tasks and sync documents automatically.", false),
        app("Zoom", "🎥", "Schedule and start video meetings directly from any project dashboard.", false),
        app("GitHub", "🐙", "Link pull requests to tasks and track development progress in real-time.", false),
        app("Trello", "📋", "Import your boards and cards into ProManage and keep them in sync.", false),
        app("Microsoft Teams", "👥", "Get automation status updates and collaboration alerts in your Teams workspace.", false),
    ]
}

// TaskMaster

pub fn active_tasks() -> Vec<ActiveTask> {
    vec![
        ActiveTask {
            id: 1,
            category: "DESIGN".to_string(),
            title: "User Interface Refactor".to_string(),
            description: "Update all legacy components to support...".to_string(),
            assignees: strings(&["A"]),
            due_label: "Due in 2d".to_string(),
            completed: false,
            highlighted: false,
        },
        ActiveTask {
            id: 2,
            category: "DEV".to_string(),
            title: "API Integration".to_string(),
            description: "Connect the dashboard widgets to the real-time...".to_string(),
            assignees: strings(&["M"]),
            due_label: "Due Tomorrow".to_string(),
            completed: false,
            highlighted: true,
        },
        ActiveTask {
            id: 3,
            category: "QA".to_string(),
            title: "Final Review".to_string(),
            description: "Perform end-to-end testing on the task...".to_string(),
            assignees: strings(&["S", "J"]),
            due_label: "Completed".to_string(),
            completed: true,
            highlighted: false,
        },
    ]
}

pub fn taskmaster_discussion() -> Vec<Comment> {
    vec![
        Comment {
            author: Person::new("Marcus Lee", "ML"),
            message: "The initial designs are ready for review. Please check the uploaded files.".to_string(),
            timestamp: "2h ago".to_string(),
            highlighted: false,
        },
        Comment {
            author: Person::new("Alex Rivera", "AR"),
            message: "Thanks Marcus! I'll take a look this afternoon.".to_string(),
            timestamp: "1h ago".to_string(),
            highlighted: true,
        },
    ]
}

pub fn taskmaster_assignees() -> Vec<Person> {
    vec![
        Person::new("Jordan Smith", "JS"),
        Person::new("Emma Wilson", "EW"),
        Person::new("Marcus Lee", "ML"),
    ]
}

/// (label, percent) rows under the overall progress figure.
pub fn progress_breakdown() -> Vec<(&'static str, u8)> {
    vec![("In Progress Tasks", 60), ("Internal Audits", 100)]
}

// Sub-admin portal

pub fn subadmin_stats() -> Vec<StatTile> {
    vec![
        StatTile {
            card: StatCard::new("Total Tasks", "124").with_change("↗12% from last week", Trend::Up),
            icon: "📋".to_string(),
            tint: Tone::Purple,
            progress: None,
        },
        StatTile {
            card: StatCard::new("Completed", "84"),
            icon: "✓".to_string(),
            tint: Tone::Success,
            progress: Some(68),
        },
        StatTile {
            card: StatCard::new("In Progress", "31"),
            icon: "⏱".to_string(),
            tint: Tone::Orange,
            progress: Some(25),
        },
        StatTile {
            card: StatCard::new("Overall Efficiency", "82%").with_change("⚡Consistently High", Trend::Up),
            icon: "📊".to_string(),
            tint: Tone::Info,
            progress: None,
        },
    ]
}

pub fn staff_progress() -> Vec<StaffProgress> {
    let staff = |name: &str, role: &str, progress: u8, avatar: &str| StaffProgress {
        name: name.to_string(),
        role: role.to_string(),
        progress,
        avatar: avatar.to_string(),
    };
    vec![
        staff("John Doe", "Senior Developer", 92, "JD"),
        staff("Sarah Smith", "UI Designer", 75, "SS"),
        staff("Michael Chen", "QA Engineer", 45, "MC"),
        staff("Emily Davis", "Content Lead", 88, "ED"),
    ]
}

pub fn detailed_tasks() -> Vec<DetailedTask> {
    let task = |id: u32, title: &str, team: &str, progress: u8, status: &str, icon: &str| {
        DetailedTask {
            id,
            title: title.to_string(),
            team: team.to_string(),
            progress,
            status: status.to_string(),
            icon: icon.to_string(),
        }
    };
    vec![
        task(1, "Initial Research & Planning", "Strategy Team", 100, "100% Done", "✓"),
        task(2, "System Architecture Design", "Architecture Team", 68, "68% Progress", "🏗"),
        task(3, "Frontend Component Development", "UI Development Team", 42, "42% Progress", "💻"),
        task(4, "API Documentation", "Backend Team", 0, "Scheduled", "☁️"),
    ]
}

// TaskFlow

pub const TASKFLOW_PROGRESS: u8 = 68;

pub fn taskflow_discussion() -> Vec<Comment> {
    vec![
        Comment {
            author: Person::new("Sarah Jenkins", "SJ"),
            message: "I've uploaded the initial wireframes for the dashboard. Let me know what you think about the sidebar layout.".to_string(),
            timestamp: "2 hours ago".to_string(),
            highlighted: false,
        },
        Comment {
            author: Person::new("Michael Ross", "MR"),
            message: "The sidebar looks great. I'll start working on the responsive menu behavior now.".to_string(),
            timestamp: "1 hour ago".to_string(),
            highlighted: false,
        },
    ]
}

pub fn group_members() -> Vec<GroupMember> {
    let member = |name: &str, role: &str, avatar: &str, online: bool| GroupMember {
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar.to_string(),
        online,
    };
    vec![
        member("Alex Morgan", "Lead Designer", "AM", true),
        member("Sarah Jenkins", "Frontend Dev", "SJ", true),
        member("Michael Ross", "Backend Dev", "MR", false),
        member("David Kim", "Project Manager", "DK", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::tasks_for_day;
    use crate::domain::project::count_with_status;

    #[test]
    fn test_three_active_projects() {
        assert_eq!(count_with_status(&projects(), ProjectStatus::Active), 3);
    }

    #[test]
    fn test_calendar_fixture_fits_month() {
        let month = calendar_month().unwrap();
        assert_eq!(month.days_in_month(), 31);
        assert!(month.contains(CALENDAR_TODAY));
        assert!(calendar_tasks().iter().all(|task| month.contains(task.date)));
        assert_eq!(tasks_for_day(&calendar_tasks(), 5).len(), 2);
    }

    #[test]
    fn test_only_overdue_task_is_unassigned() {
        let unassigned: Vec<_> = task_list().into_iter().filter(|t| !t.is_assigned()).collect();
        assert_eq!(unassigned.len(), 1);
        assert!(unassigned[0].overdue);
    }

    #[test]
    fn test_today_is_a_monday() {
        use chrono::{Datelike, Weekday};
        assert_eq!(today().unwrap().weekday(), Weekday::Mon);
    }
}
