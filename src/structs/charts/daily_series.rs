use serde::{Deserialize, Serialize};

/// Daily usage points for the line chart. `values[i]` belongs to `labels[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

impl DailySeries {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}
