//! Dashboard view model
//!
//! Summary cards, the two progress rings, the upcoming-events prefix and the
//! attendance chart spec.

use serde::Serialize;

use crate::chart::{attendance_chart, ChartSpec};
use crate::config::Config;
use crate::data::{CalendarEvent, StudentRecord};
use crate::icon::Icon;
use crate::router::Route;
use crate::tier::{pending_exams_tier, Thresholds, Tier};

/// One headline metric card
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub icon: Icon,
    pub tier: Tier,
    /// Page opened when the card is clicked
    pub link: Route,
}

/// Circular progress indicator
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressRing {
    /// Whole percent
    pub value: i64,
    pub label: &'static str,
    /// Diameter in pixels
    pub size: f64,
    pub color: &'static str,
}

impl ProgressRing {
    pub const STROKE: f64 = 10.0;

    pub fn radius(&self) -> f64 {
        self.size / 2.0 - Self::STROKE
    }

    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius()
    }

    /// Stroke dash offset that leaves `value` percent of the ring drawn
    pub fn dash_offset(&self) -> f64 {
        let c = self.circumference();
        c - (self.value as f64 / 100.0) * c
    }
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub name: String,
    pub subtitle: String,
    pub cards: Vec<SummaryCard>,
    pub rings: Vec<ProgressRing>,
    pub upcoming: Vec<CalendarEvent>,
    /// Page opened when an upcoming entry is clicked
    pub upcoming_link: Route,
    pub attendance_chart: ChartSpec,
}

impl DashboardView {
    pub fn build(record: &StudentRecord, config: &Config) -> Self {
        let profile = &record.profile;
        let top = config.thresholds.top;
        let completion = profile.credit_completion().unwrap_or(0.0);

        let cards = vec![
            SummaryCard {
                title: "Current CGPA",
                value: format!("{:.2}", profile.cgpa),
                icon: Icon::GraduationCap,
                tier: Thresholds { top, good: 90.0, critical: 80.0 }.classify(profile.cgpa * 10.0),
                link: Route::Academics,
            },
            SummaryCard {
                title: "Overall Attendance",
                value: format!("{:.1}%", profile.attendance_percentage),
                icon: Icon::Target,
                tier: config.thresholds.classify(profile.attendance_percentage),
                link: Route::Academics,
            },
            SummaryCard {
                title: "Credits Earned",
                value: format!("{} / {}", profile.credits_earned, profile.credits_total),
                icon: Icon::BookOpen,
                tier: Thresholds { top, good: 90.0, critical: 70.0 }.classify(completion),
                link: Route::Academics,
            },
            SummaryCard {
                title: "Pending Exams",
                value: profile.pending_exams.to_string(),
                icon: Icon::Clock,
                tier: pending_exams_tier(profile.pending_exams),
                link: Route::Schedule,
            },
        ];

        let rings = vec![
            ProgressRing {
                value: (profile.cgpa * 10.0).round() as i64,
                label: "CGPA Score",
                size: 160.0,
                color: "cyan",
            },
            ProgressRing {
                value: completion.round() as i64,
                label: "Credit Completion",
                size: 160.0,
                color: "teal",
            },
        ];

        let upcoming = record
            .events
            .iter()
            .take(config.dashboard.upcoming_limit)
            .cloned()
            .collect();

        Self {
            name: profile.name.clone(),
            subtitle: format!("{} | Sem {}", profile.branch, profile.current_sem),
            cards,
            rings,
            upcoming,
            upcoming_link: Route::Schedule,
            attendance_chart: attendance_chart(
                profile.attendance_percentage,
                config.chart.attendance_target,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> DashboardView {
        DashboardView::build(&StudentRecord::load_default().unwrap(), &Config::default())
    }

    #[test]
    fn test_cards() {
        let view = view();
        let values: Vec<_> = view.cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["9.70", "92.8%", "140 / 160", "2"]);

        let tiers: Vec<_> = view.cards.iter().map(|c| c.tier).collect();
        assert_eq!(tiers, vec![Tier::Top, Tier::Top, Tier::Warning, Tier::Warning]);

        assert_eq!(view.cards[3].link, Route::Schedule);
        assert!(view.cards[..3].iter().all(|c| c.link == Route::Academics));
    }

    #[test]
    fn test_progress_rings() {
        let view = view();
        assert_eq!(view.rings[0].value, 97);
        // 140 / 160 = 87.5%
        assert_eq!(view.rings[1].value, 88);
    }

    #[test]
    fn test_ring_geometry() {
        let ring = ProgressRing {
            value: 50,
            label: "x",
            size: 120.0,
            color: "cyan",
        };
        assert_eq!(ring.radius(), 50.0);
        assert!((ring.dash_offset() - ring.circumference() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_upcoming_is_fixed_prefix() {
        let record = StudentRecord::load_default().unwrap();
        let view = DashboardView::build(&record, &Config::default());
        assert_eq!(view.upcoming.len(), 5);
        assert_eq!(view.upcoming[..], record.events[..5]);
        assert_eq!(view.upcoming_link, Route::Schedule);
    }

    #[test]
    fn test_upcoming_limit_from_config() {
        let mut config = Config::default();
        config.dashboard.upcoming_limit = 2;
        let view = DashboardView::build(&StudentRecord::load_default().unwrap(), &config);
        assert_eq!(view.upcoming.len(), 2);
    }

    #[test]
    fn test_attendance_chart_uses_profile() {
        let view = view();
        assert_eq!(view.attendance_chart.data.datasets[0].data[0], 92.8);
        assert_eq!(view.attendance_chart.data.datasets[0].data[1], 75.0);
    }
}
