use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarDataset {
    pub data: Vec<f64>,
}

/// Bar chart input. Every dataset carries one value per label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBarData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

impl Default for WeeklyBarData {
    // the bar widget always reads datasets[0], so the empty state keeps one
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            datasets: vec![BarDataset::default()],
        }
    }
}

impl WeeklyBarData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn primary(&self) -> Option<&BarDataset> {
        self.datasets.first()
    }
}
