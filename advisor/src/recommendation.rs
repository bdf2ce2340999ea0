// ═══════════════════════════════════════════════════════════════════════
// Output payloads
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use ur_engine::types::Card;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRecommendation {
    pub recommended_card: Card,
    pub recommended_pills: u8,
    /// In `[0.05, 0.95]`, two decimals.
    pub win_probability: f64,
    pub reasoning: String,
    /// At most two, never the recommended card.
    pub alternatives: Vec<Alternative>,
    /// In `[0.3, 0.95]`.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub card: Card,
    pub pills: u8,
    pub probability: f64,
    pub reasoning: String,
}

/// Describes a loaded analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub capabilities: Vec<String>,
}
