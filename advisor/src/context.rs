// ═══════════════════════════════════════════════════════════════════════
// Context analysis — how far the battle has progressed and who is ahead
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};
use ur_engine::types::BattleState;

/// Coarse battle progress used to bias the heuristic weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Early,
    Mid,
    Late,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Early => write!(f, "early"),
            Stage::Mid => write!(f, "mid"),
            Stage::Late => write!(f, "late"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleContext {
    pub stage: Stage,
    /// (player − opponent) combined stats over the larger side, roughly [-1, 1].
    pub power_balance: f64,
    pub card_advantage: i32,
    pub pills_advantage: i32,
}

pub fn analyze_context(state: &BattleState) -> BattleContext {
    BattleContext {
        stage: determine_stage(state),
        power_balance: power_balance(state),
        card_advantage: state.player_cards.len() as i32 - state.opponent_cards.len() as i32,
        pills_advantage: state.pills_diff(),
    }
}

/// First matching rule wins: early, then mid, otherwise late.
pub fn determine_stage(state: &BattleState) -> Stage {
    let rounds = state.rounds_played();
    let remaining = state.player_cards.len();

    if rounds <= 1 && remaining >= 3 {
        Stage::Early
    } else if rounds <= 2 && remaining >= 2 {
        Stage::Mid
    } else {
        Stage::Late
    }
}

fn power_balance(state: &BattleState) -> f64 {
    let player = state.player_strength();
    let opponent = state.opponent_strength();
    (player - opponent) as f64 / player.max(opponent).max(1) as f64
}
