//! Charts drawn by the dashboard pages

use super::spec::{
    Axis, ChartKind, ChartOptions, ChartSpec, Dataset, Grid, Plugins, Scales, Ticks, Title,
};
use crate::data::AcademicRecord;

/// Canvas id of the attendance chart
pub const ATTENDANCE_CHART_ID: &str = "attendance-chart";

/// Canvas id of the CGPA trend chart
pub const CGPA_CHART_ID: &str = "cgpa-chart";

const AXIS_TEXT: &str = "#4b5563";
const GRID_LINE: &str = "rgba(0, 0, 0, 0.1)";
const CYAN: &str = "#06b6d4";

fn ticks() -> Ticks {
    Ticks {
        color: Some(AXIS_TEXT.to_string()),
    }
}

fn grid_lines() -> Grid {
    Grid {
        display: None,
        color: Some(GRID_LINE.to_string()),
    }
}

/// Horizontal bars comparing attendance against the target and the maximum
pub fn attendance_chart(attendance: f64, target: f64) -> ChartSpec {
    let labels = vec![
        "Your Attendance".to_string(),
        "Target Minimum".to_string(),
        "Max Capacity".to_string(),
    ];

    let dataset = Dataset::new("Attendance", vec![attendance, target, 100.0])
        .background(vec![
            "rgba(20, 184, 166, 0.9)",
            "rgba(59, 130, 246, 0.5)",
            "rgba(200, 200, 200, 0.2)",
        ])
        .border(
            vec!["rgb(20, 184, 166)", "rgb(59, 130, 246)", "rgb(200, 200, 200)"],
            1.0,
        )
        .radius(4.0);

    let options = ChartOptions {
        index_axis: Some("y".to_string()),
        plugins: Plugins {
            title: Some(Title {
                display: true,
                text: "Overall Attendance Analysis".to_string(),
                color: Some(AXIS_TEXT.to_string()),
            }),
            ..Plugins::default()
        },
        scales: Scales {
            y: Some(Axis {
                grid: Grid {
                    display: Some(false),
                    color: None,
                },
                ticks: ticks(),
                ..Axis::default()
            }),
            x: Some(Axis {
                begin_at_zero: Some(true),
                max: Some(100.0),
                grid: grid_lines(),
                ticks: ticks(),
                ..Axis::default()
            }),
        },
        ..ChartOptions::default()
    };

    ChartSpec::new(ChartKind::Bar, labels)
        .dataset(dataset)
        .options(options)
}

/// Filled line over the semester history
pub fn cgpa_trend_chart(history: &[AcademicRecord]) -> ChartSpec {
    let labels = history.iter().map(AcademicRecord::label).collect();
    let points = history.iter().map(|r| r.cgpa).collect();

    let dataset = Dataset::new("CGPA", points)
        .border(CYAN, 3.0)
        .background("rgba(6, 190, 212, 0.2)")
        .curve(0.4, 6.0, CYAN)
        .filled();

    let options = ChartOptions {
        scales: Scales {
            y: Some(Axis {
                min: Some(8.5),
                max: Some(10.0),
                grid: grid_lines(),
                ticks: ticks(),
                ..Axis::default()
            }),
            x: Some(Axis {
                grid: grid_lines(),
                ticks: ticks(),
                ..Axis::default()
            }),
        },
        ..ChartOptions::default()
    };

    ChartSpec::new(ChartKind::Line, labels)
        .dataset(dataset)
        .options(options)
}
