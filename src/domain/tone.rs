/// Semantic color role returned by the derived-view helpers.
///
/// Pages never pick raw colors for status-like values; they ask the
/// domain enum for its tone and render the tone through this palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
    Purple,
    Orange,
    Neutral,
    Muted,
}

// Palette
pub const TEXT_DARK: &str = "#111827";
pub const TEXT_GRAY: &str = "#6b7280";
pub const BORDER: &str = "#e5e7eb";
pub const BACKGROUND: &str = "#f9fafb";
pub const SURFACE: &str = "#ffffff";

impl Tone {
    /// Foreground color (text, dots, bar fills).
    pub fn color(self) -> &'static str {
        match self {
            Tone::Primary => "#2563eb",
            Tone::Success => "#10b981",
            Tone::Warning => "#f59e0b",
            Tone::Danger => "#ef4444",
            Tone::Info => "#3b82f6",
            Tone::Purple => "#9333ea",
            Tone::Orange => "#f97316",
            Tone::Neutral => TEXT_GRAY,
            Tone::Muted => "#9ca3af",
        }
    }

    /// Light background used behind badges.
    pub fn tint(self) -> &'static str {
        match self {
            Tone::Primary | Tone::Info => "#dbeafe",
            Tone::Success => "#d1fae5",
            Tone::Warning => "#ffedd5",
            Tone::Danger => "#fee2e2",
            Tone::Purple => "#f3e8ff",
            Tone::Orange => "#ffedd5",
            Tone::Neutral | Tone::Muted => "#f3f4f6",
        }
    }

    /// Stable lowercase name, rendered as a `data-tone` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
            Tone::Purple => "purple",
            Tone::Orange => "orange",
            Tone::Neutral => "neutral",
            Tone::Muted => "muted",
        }
    }

    /// Inline style for a pill-shaped badge in this tone.
    pub fn badge_style(self) -> String {
        format!(
            "display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 12px; font-weight: 500; background: {}; color: {};",
            self.tint(),
            self.color()
        )
    }
}

const AVATAR_GRADIENTS: [(&str, &str); 4] = [
    ("#c084fc", "#f472b6"),
    ("#60a5fa", "#22d3ee"),
    ("#fb923c", "#f87171"),
    ("#4ade80", "#2dd4bf"),
];

/// CSS gradient for the avatar at `index`, cycling through four pairs.
pub fn avatar_gradient(index: usize) -> String {
    let (from, to) = AVATAR_GRADIENTS[index % AVATAR_GRADIENTS.len()];
    format!("linear-gradient(135deg, {from}, {to})")
}

/// First character of every whitespace-separated word: "John D." -> "JD".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_gradient_cycles() {
        assert_eq!(avatar_gradient(0), avatar_gradient(4));
        assert_eq!(avatar_gradient(1), avatar_gradient(5));
        assert_ne!(avatar_gradient(0), avatar_gradient(1));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("John D."), "JD");
        assert_eq!(initials("Sarah Connor"), "SC");
        assert_eq!(initials("  Alex   B. "), "AB");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_badge_style_uses_tone_colors() {
        let style = Tone::Danger.badge_style();
        assert!(style.contains(Tone::Danger.color()));
        assert!(style.contains(Tone::Danger.tint()));
    }
}
