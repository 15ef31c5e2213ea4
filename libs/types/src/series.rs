//! Mid-price series
//!
//! Append-only while a run is in progress; handed out read-only afterwards.

use serde::{Deserialize, Serialize};

/// Ordered mid-price samples, one per simulated step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, mid: f64) {
        self.0.push(mid);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<f64> {
        self.0.get(step).copied()
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn min(&self) -> Option<f64> {
        self.iter().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.iter().reduce(f64::max)
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_extremes() {
        let mut series = PriceSeries::with_capacity(3);
        series.push(100.0);
        series.push(99.5);
        series.push(100.7);
        assert_eq!(series.len(), 3);
        assert_eq!(series.first(), Some(100.0));
        assert_eq!(series.last(), Some(100.7));
        assert_eq!(series.min(), Some(99.5));
        assert_eq!(series.max(), Some(100.7));
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.min(), None);
        assert_eq!(series.get(0), None);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let series = PriceSeries::from(vec![1.5, 2.5]);
        assert_eq!(serde_json::to_string(&series).unwrap(), "[1.5,2.5]");
    }
}
