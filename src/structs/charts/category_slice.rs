use serde::{Deserialize, Serialize};

/// One pie slice with the legend styling the pie widget expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub name: String,
    pub population: f64,
    pub color: String,
    pub legend_font_color: String,
    pub legend_font_size: u32,
}

/// Share of the pie each slice takes, in fetch order. All zeros if the
/// total population is zero.
pub fn slice_shares(slices: &[CategorySlice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|s| s.population).sum();
    slices
        .iter()
        .map(|s| if total > 0.0 { s.population / total } else { 0.0 })
        .collect()
}
