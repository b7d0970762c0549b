use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame};
use serde::Serialize;

use crate::data::Earthquake;
use crate::io::{write_csv, write_csv_string};

/// One sample of the magnitude-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// UTC calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub magnitude: f64,
    pub location: String,
}

/// Chart series for a newest-first earthquake subset, oldest first.
pub fn trend_points(earthquakes: &[&Earthquake]) -> Vec<TrendPoint> {
    earthquakes.iter().rev()
        .map(|eq| TrendPoint {
            date: eq.timestamp()
                .map(|ts| ts.date_naive().format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            magnitude: eq.magnitude,
            location: eq.location.clone(),
        })
        .collect()
}

fn trend_frame(points: &[TrendPoint]) -> Result<DataFrame> {
    let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
    let magnitudes: Vec<f64> = points.iter().map(|p| p.magnitude).collect();
    let locations: Vec<&str> = points.iter().map(|p| p.location.as_str()).collect();

    DataFrame::new(vec![
        Column::new("date".into(), dates),
        Column::new("magnitude".into(), magnitudes),
        Column::new("location".into(), locations),
    ])
    .context("[present::trend] Failed to build trend frame")
}

/// Trend series as CSV text with a `date,magnitude,location` header.
pub fn trend_csv(points: &[TrendPoint]) -> Result<String> {
    write_csv_string(&mut trend_frame(points)?)
}

/// Write the trend series to a CSV file.
pub fn write_trend_csv(points: &[TrendPoint], path: &Path) -> Result<()> {
    write_csv(&mut trend_frame(points)?, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(datetime: i64, magnitude: f64) -> Earthquake {
        Earthquake {
            datetime,
            depth: 1.0,
            magnitude,
            location: format!("M{magnitude} near Davao"),
            latitude: 7.0,
            longitude: 125.6,
        }
    }

    #[test]
    fn points_are_chronological() {
        let newer = quake(1_704_153_600_000, 4.5); // 2024-01-02
        let older = quake(1_704_067_200_000, 3.1); // 2024-01-01
        let points = trend_points(&[&newer, &older]);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2024-01-01");
        assert_eq!(points[0].magnitude, 3.1);
        assert_eq!(points[1].date, "2024-01-02");
        assert_eq!(points[1].location, "M4.5 near Davao");
    }

    #[test]
    fn csv_has_header_and_rows() {
        let eq = quake(1_704_067_200_000, 3.1);
        let csv = trend_csv(&trend_points(&[&eq])).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("date,magnitude,location"));
        assert_eq!(lines.next(), Some("2024-01-01,3.1,M3.1 near Davao"));
    }

    #[test]
    fn writes_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trend.csv");
        let eq = quake(1_704_067_200_000, 3.1);
        write_trend_csv(&trend_points(&[&eq]), &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("date,magnitude,location"));
    }
}
