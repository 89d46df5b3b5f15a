//! Icon identifiers
//!
//! Each concept the views decorate maps to a fixed icon. The frontend decides
//! how to draw them; [`Icon::glyph`] is the built-in emoji rendering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Dashboard,
    GraduationCap,
    Calendar,
    User,
    CheckCircle,
    Target,
    BookOpen,
    Clock,
    Alert,
    ChevronDown,
    ChevronUp,
    Bell,
    Message,
    Briefcase,
    Settings,
}

impl Icon {
    /// Stable identifier, e.g. for CSS hooks
    pub fn id(&self) -> &'static str {
        match self {
            Icon::Dashboard => "dashboard",
            Icon::GraduationCap => "graduation-cap",
            Icon::Calendar => "calendar",
            Icon::User => "user",
            Icon::CheckCircle => "check-circle",
            Icon::Target => "target",
            Icon::BookOpen => "book-open",
            Icon::Clock => "clock",
            Icon::Alert => "alert",
            Icon::ChevronDown => "chevron-down",
            Icon::ChevronUp => "chevron-up",
            Icon::Bell => "bell",
            Icon::Message => "message",
            Icon::Briefcase => "briefcase",
            Icon::Settings => "settings",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Dashboard => "📊",
            Icon::GraduationCap => "🎓",
            Icon::Calendar => "📅",
            Icon::User => "👤",
            Icon::CheckCircle => "✅",
            Icon::Target => "🎯",
            Icon::BookOpen => "📖",
            Icon::Clock => "⏰",
            Icon::Alert => "⚠️",
            Icon::ChevronDown => "▾",
            Icon::ChevronUp => "▴",
            Icon::Bell => "🔔",
            Icon::Message => "✉️",
            Icon::Briefcase => "💼",
            Icon::Settings => "⚙️",
        }
    }
}
