//! Payload normalization, one function per chart kind.
//!
//! Every function here is total. A payload that does not have the expected
//! shape produces the chart's empty value instead of an error, so a screen
//! with bad data looks the same as a screen with no data.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use crate::config::constants::{LEGEND_FONT_COLOR, LEGEND_FONT_SIZE};
use crate::helpers::color_helper::random_hex_color;
use crate::structs::charts::category_slice::CategorySlice;
use crate::structs::charts::daily_series::DailySeries;
use crate::structs::charts::progress_data::ProgressData;
use crate::structs::charts::weekly_bar_data::{BarDataset, WeeklyBarData};
use crate::traits::chart_normalizer::ChartNormalizer;

pub fn normalize_daily(raw: &Value) -> DailySeries {
    let values = raw.get("values").and_then(|v| numbers(v, point_value));
    let labels = raw.get("labels").and_then(strings);

    match (values, labels) {
        (Some(values), Some(labels)) if values.len() == labels.len() => DailySeries { values, labels },
        _ => {
            log::debug!("daily payload rejected, using empty series");
            DailySeries::default()
        }
    }
}

pub fn normalize_weekly(raw: &Value) -> WeeklyBarData {
    let Some(labels) = raw.get("labels").and_then(strings) else {
        log::debug!("weekly payload has no labels, using empty bars");
        return WeeklyBarData::default();
    };

    let datasets: Option<Vec<BarDataset>> = raw
        .get("datasets")
        .and_then(Value::as_array)
        .filter(|sets| !sets.is_empty())
        .and_then(|sets| {
            sets.iter()
                .map(|set| set.get("data").and_then(|d| numbers(d, Value::as_f64)))
                .map(|data| data.filter(|d| d.len() == labels.len()).map(|data| BarDataset { data }))
                .collect()
        });

    match datasets {
        Some(datasets) => WeeklyBarData { labels, datasets },
        None => {
            log::debug!("weekly datasets missing or misaligned with labels, using empty bars");
            WeeklyBarData::default()
        }
    }
}

/// Builds pie slices in fetch order, giving each a color from `rng`.
///
/// Colors are independent draws, so two slices can end up with the same
/// color. Records without a string `name` or a non-negative `population`
/// are skipped.
pub fn normalize_category<R: Rng>(raw: &Value, rng: &mut R) -> Vec<CategorySlice> {
    let Some(records) = raw.as_array() else {
        log::debug!("category payload is not an array, using no slices");
        return Vec::new();
    };

    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let name = record.get("name").and_then(Value::as_str);
            let population = record.get("population").and_then(Value::as_f64).filter(|p| *p >= 0.0);

            match (name, population) {
                (Some(name), Some(population)) => Some(CategorySlice {
                    name: name.to_string(),
                    population,
                    color: random_hex_color(&mut *rng),
                    legend_font_color: LEGEND_FONT_COLOR.to_string(),
                    legend_font_size: LEGEND_FONT_SIZE,
                }),
                _ => {
                    log::debug!("skipping category record {}: {}", index, record);
                    None
                }
            }
        })
        .collect()
}

/// Ratios are passed through untouched, including ones outside [0, 1].
pub fn normalize_progress(raw: &Value) -> ProgressData {
    let labels = raw.get("labels").and_then(strings);
    let data = raw.get("data").and_then(|d| numbers(d, Value::as_f64));

    match (labels, data) {
        (Some(labels), Some(data)) if labels.len() == data.len() => ProgressData { labels, data },
        _ => {
            log::debug!("progress payload rejected, using empty rings");
            ProgressData::default()
        }
    }
}

fn numbers(value: &Value, element: fn(&Value) -> Option<f64>) -> Option<Vec<f64>> {
    value.as_array()?.iter().map(element).collect()
}

fn strings(value: &Value) -> Option<Vec<String>> {
    value.as_array()?.iter().map(|v| v.as_str().map(str::to_string)).collect()
}

// The line widget takes `{ "value": n }` points; bare numbers are fine too.
fn point_value(value: &Value) -> Option<f64> {
    value.as_f64().or_else(|| value.get("value").and_then(Value::as_f64))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DailyNormalizer;

impl ChartNormalizer for DailyNormalizer {
    type Output = DailySeries;

    fn normalize(&mut self, raw: &Value) -> DailySeries {
        normalize_daily(raw)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WeeklyNormalizer;

impl ChartNormalizer for WeeklyNormalizer {
    type Output = WeeklyBarData;

    fn normalize(&mut self, raw: &Value) -> WeeklyBarData {
        normalize_weekly(raw)
    }
}

/// Category normalizer owning its color source.
#[derive(Debug)]
pub struct CategoryNormalizer<R = StdRng> {
    rng: R,
}

impl<R: Rng + Send + 'static> CategoryNormalizer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl CategoryNormalizer<StdRng> {
    /// Seeded from OS entropy, so colors differ from run to run.
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }
}

impl Default for CategoryNormalizer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send + 'static> ChartNormalizer for CategoryNormalizer<R> {
    type Output = Vec<CategorySlice>;

    fn normalize(&mut self, raw: &Value) -> Vec<CategorySlice> {
        normalize_category(raw, &mut self.rng)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressNormalizer;

impl ChartNormalizer for ProgressNormalizer {
    type Output = ProgressData;

    fn normalize(&mut self, raw: &Value) -> ProgressData {
        normalize_progress(raw)
    }
}
