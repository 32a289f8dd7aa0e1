//! Chart series types

use goal_model::Progress;
use serde::{Deserialize, Serialize};

/// Label for the finished share of a goal
pub const COMPLETED_LABEL: &str = "Completed";
/// Label for the outstanding share of a goal
pub const REMAINING_LABEL: &str = "Remaining";

/// One labeled value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category or period label
    pub label: String,
    /// Percentage value
    pub value: Progress,
}

impl ChartPoint {
    /// Create point
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, value: Progress) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered sequence of chart points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartSeries(Vec<ChartPoint>);

impl ChartSeries {
    /// Points in order
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.0
    }

    /// `(label, value)` pairs in order
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, u8)> {
        self.0
            .iter()
            .map(|p| (p.label.as_str(), p.value.value()))
            .collect()
    }

    /// Sum of all values
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|p| u32::from(p.value.value())).sum()
    }

    /// Number of points
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if series is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ChartPoint>> for ChartSeries {
    fn from(points: Vec<ChartPoint>) -> Self {
        Self(points)
    }
}

impl FromIterator<ChartPoint> for ChartSeries {
    fn from_iter<T: IntoIterator<Item = ChartPoint>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Illustrative weekly trend shown when no history exists
#[must_use]
pub fn default_trend() -> Vec<ChartPoint> {
    [("Week 1", 30), ("Week 2", 50), ("Week 3", 60), ("Week 4", 80)]
        .into_iter()
        .map(|(label, value)| ChartPoint::new(label, Progress::clamped(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_trend_shape() {
        let series = ChartSeries::from(default_trend());
        assert_eq!(
            series.pairs(),
            vec![("Week 1", 30), ("Week 2", 50), ("Week 3", 60), ("Week 4", 80)]
        );
    }

    #[test]
    fn series_serializes_as_array() {
        let series: ChartSeries = [ChartPoint::new("Completed", Progress::clamped(80))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"[{"label":"Completed","value":80}]"#);
    }
}
