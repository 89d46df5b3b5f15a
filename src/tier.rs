//! Metric Tiers
//!
//! Maps a continuous metric (attendance, scaled CGPA, credit completion) to a
//! discrete display tier by threshold comparison.
//!
//! Values are compared as given: there is no clamping, so a negative
//! attendance is `Critical` and anything above 100 is `Top`. `NaN` fails every
//! comparison and lands in `Critical`.

use serde::{Deserialize, Serialize};

use crate::data::RecordStatus;

/// Value at or above which a metric is always in the top tier
pub const TOP_THRESHOLD: f64 = 90.0;

/// Default lower bound of the good tier
pub const DEFAULT_GOOD_THRESHOLD: f64 = 85.0;

/// Default lower bound of the warning tier
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 75.0;

/// Display tier, ordered from best to worst
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Top,
    Good,
    Warning,
    Critical,
}

impl Tier {
    /// Text colour class for this tier
    pub fn text_class(&self) -> &'static str {
        match self {
            Tier::Top => "text-cyan-600",
            Tier::Good => "text-teal-600",
            Tier::Warning => "text-amber-600",
            Tier::Critical => "text-red-600",
        }
    }

    /// Severity rank, 0 for `Top` up to 3 for `Critical`
    pub fn severity(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Top => write!(f, "top"),
            Tier::Good => write!(f, "good"),
            Tier::Warning => write!(f, "warning"),
            Tier::Critical => write!(f, "critical"),
        }
    }
}

/// Classify `value` against the given good/critical thresholds
pub fn tier(value: f64, good_threshold: f64, critical_threshold: f64) -> Tier {
    if value >= TOP_THRESHOLD {
        Tier::Top
    } else if value >= good_threshold {
        Tier::Good
    } else if value >= critical_threshold {
        Tier::Warning
    } else {
        Tier::Critical
    }
}

/// Classify `value` with the default thresholds (85 / 75)
pub fn default_tier(value: f64) -> Tier {
    tier(value, DEFAULT_GOOD_THRESHOLD, DEFAULT_CRITICAL_THRESHOLD)
}

/// Configurable threshold set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    #[serde(default = "default_top")]
    pub top: f64,
    #[serde(default = "default_good")]
    pub good: f64,
    #[serde(default = "default_critical")]
    pub critical: f64,
}

fn default_top() -> f64 {
    TOP_THRESHOLD
}

fn default_good() -> f64 {
    DEFAULT_GOOD_THRESHOLD
}

fn default_critical() -> f64 {
    DEFAULT_CRITICAL_THRESHOLD
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            top: default_top(),
            good: default_good(),
            critical: default_critical(),
        }
    }
}

impl Thresholds {
    /// Thresholds with custom good/critical bounds and the standard top bound
    pub fn new(good: f64, critical: f64) -> Self {
        Self {
            top: TOP_THRESHOLD,
            good,
            critical,
        }
    }

    pub fn classify(&self, value: f64) -> Tier {
        if value >= self.top {
            Tier::Top
        } else if value >= self.good {
            Tier::Good
        } else if value >= self.critical {
            Tier::Warning
        } else {
            Tier::Critical
        }
    }

    /// Whether the bounds are ordered critical <= good <= top
    pub fn is_ordered(&self) -> bool {
        self.critical <= self.good && self.good <= self.top
    }
}

/// Tier for the pending-exams card: more than two pending is critical
pub fn pending_exams_tier(pending: u32) -> Tier {
    if pending > 2 {
        Tier::Critical
    } else {
        Tier::Warning
    }
}

/// Badge classes for a semester or subject status
pub fn status_badge_class(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Excellent => "bg-cyan-100 text-cyan-700",
        RecordStatus::Outstanding => "bg-teal-100 text-teal-700",
        RecordStatus::Good => "bg-blue-100 text-blue-700",
        RecordStatus::NeedsFocus => "bg-amber-100 text-amber-700",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_examples() {
        assert_eq!(default_tier(92.0), Tier::Top);
        assert_eq!(tier(80.0, 85.0, 75.0), Tier::Warning);
        assert_eq!(default_tier(50.0), Tier::Critical);
        assert_eq!(default_tier(85.0), Tier::Good);
        assert_eq!(default_tier(75.0), Tier::Warning);
    }

    #[test]
    fn test_tier_monotonic() {
        let thresholds = [(85.0, 75.0), (90.0, 80.0), (90.0, 70.0), (60.0, 40.0)];
        for (good, critical) in thresholds {
            let mut previous = tier(-50.0, good, critical);
            let mut v = -50.0;
            while v <= 150.0 {
                let current = tier(v, good, critical);
                assert!(
                    current.severity() <= previous.severity(),
                    "severity rose at {} ({} -> {})",
                    v,
                    previous,
                    current
                );
                previous = current;
                v += 0.25;
            }
        }
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert_eq!(default_tier(-10.0), Tier::Critical);
        assert_eq!(default_tier(250.0), Tier::Top);
        assert_eq!(default_tier(f64::NAN), Tier::Critical);
    }

    #[test]
    fn test_thresholds_classify_matches_tier() {
        let t = Thresholds::new(90.0, 70.0);
        for v in [95.0, 90.0, 87.5, 70.0, 69.9] {
            assert_eq!(t.classify(v), tier(v, 90.0, 70.0));
        }
        assert!(t.is_ordered());
        assert!(!Thresholds::new(70.0, 90.0).is_ordered());
    }

    #[test]
    fn test_pending_exams_tier() {
        assert_eq!(pending_exams_tier(2), Tier::Warning);
        assert_eq!(pending_exams_tier(3), Tier::Critical);
    }
}
