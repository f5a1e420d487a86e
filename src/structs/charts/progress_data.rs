use serde::{Deserialize, Serialize};

/// Progress rings. Values are completion ratios as delivered by the
/// endpoint; nothing here forces them into [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ProgressData {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn out_of_range(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
            .filter(|(_, value)| !(0.0..=1.0).contains(value))
    }
}
