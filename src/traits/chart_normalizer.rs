use serde_json::Value;

/// Reshapes a raw payload into one chart's input. Must be total: anything it
/// cannot use becomes `Self::Output::default()`.
pub trait ChartNormalizer: Send + 'static {
    type Output: Clone + Default + Send + Sync + 'static;

    fn normalize(&mut self, raw: &Value) -> Self::Output;
}
