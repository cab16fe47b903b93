use serde::{Deserialize, Serialize};

/// Precomputed aggregate statistics, loaded verbatim from the fixture.
/// The core never interprets the shape; it is carried as an opaque JSON
/// value and handed to the rendering layer as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatisticsReport(pub serde_json::Value);

impl StatisticsReport {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}
