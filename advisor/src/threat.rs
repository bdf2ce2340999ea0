// ═══════════════════════════════════════════════════════════════════════
// Threat assessment — profiles the opponent's remaining hand
// ═══════════════════════════════════════════════════════════════════════

use serde::Serialize;
use ur_engine::types::{BattleState, Card};

/// Notional maximum combined power + damage. Calibration constant: the
/// level is deliberately left unclamped, and the 0.5 / 0.7 cut-offs used
/// downstream were tuned against the raw value.
pub const THREAT_SCALE: f64 = 14.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatProfile {
    pub avg_power: f64,
    pub avg_damage: f64,
    pub threat_level: f64,
    pub likely_play: Option<Card>,
    pub counters: Vec<&'static str>,
}

impl ThreatProfile {
    /// Combined average stat a card must beat to count as effective.
    pub fn combined_average(&self) -> f64 {
        self.avg_power + self.avg_damage
    }
}

pub fn assess_threat(opponent_cards: &[Card], state: &BattleState) -> ThreatProfile {
    if opponent_cards.is_empty() {
        return ThreatProfile {
            avg_power: 0.0,
            avg_damage: 0.0,
            threat_level: 0.0,
            likely_play: None,
            counters: Vec::new(),
        };
    }

    let n = opponent_cards.len() as f64;
    let avg_power = opponent_cards.iter().map(|c| c.power as f64).sum::<f64>() / n;
    let avg_damage = opponent_cards.iter().map(|c| c.damage as f64).sum::<f64>() / n;

    ThreatProfile {
        avg_power,
        avg_damage,
        threat_level: (avg_power + avg_damage) / THREAT_SCALE,
        likely_play: predict_opponent_play(opponent_cards, state).cloned(),
        counters: counter_strategies(avg_power),
    }
}

/// The opponent's strongest card by power + damage; the first one listed
/// wins a tie.
pub fn predict_opponent_play<'a>(cards: &'a [Card], _state: &BattleState) -> Option<&'a Card> {
    cards.iter().fold(None, |strongest: Option<&Card>, card| match strongest {
        Some(best) if card.total() <= best.total() => Some(best),
        _ => Some(card),
    })
}

fn counter_strategies(avg_power: f64) -> Vec<&'static str> {
    let mut strategies = Vec::new();
    if avg_power > 6.0 {
        strategies.push("High damage focus");
    }
    if avg_power <= 4.0 {
        strategies.push("Power advantage");
    }
    strategies
}
