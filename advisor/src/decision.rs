// ═══════════════════════════════════════════════════════════════════════
// Decision selection — which card, how many pills, and the odds
//
// None of this is a fitted model. Win probability is an additive linear
// heuristic; its divisors and weights are opaque calibration constants
// kept as-is so recommendations stay comparable with earlier releases.
// ═══════════════════════════════════════════════════════════════════════

use crate::context::{BattleContext, Stage};
use crate::evaluation::CardAnalysis;
use crate::threat::ThreatProfile;
use ur_engine::types::{BattleState, Card};

pub const MIN_WIN_PROBABILITY: f64 = 0.05;
pub const MAX_WIN_PROBABILITY: f64 = 0.95;

/// Card strength that maps to a probability of 1.0 before adjustments.
const STRENGTH_SCALE: f64 = 20.0;
/// Life and pill differences are both normalised against this.
const ADVANTAGE_SCALE: f64 = 24.0;

// ── Card ───────────────────────────────────────────────────────────────

/// Walk the ranking and take the first card that both beats the
/// opponent's average stats and has a clan synergy above 1. Falls back to
/// the top-ranked card. Returns `None` only for an empty ranking.
pub fn select_card<'a>(
    ranked: &'a [CardAnalysis],
    threat: &ThreatProfile,
    _context: &BattleContext,
) -> Option<&'a CardAnalysis> {
    ranked.iter()
        .find(|a| is_effective_against(a, threat))
        .or_else(|| ranked.first())
}

fn is_effective_against(analysis: &CardAnalysis, threat: &ThreatProfile) -> bool {
    analysis.score as f64 > threat.combined_average() && analysis.synergy > 1
}

// ── Pills ──────────────────────────────────────────────────────────────

/// Pills to commit with `card`, always within `[0, state.player_pills]`.
pub fn optimal_pills(
    card: &Card,
    threat: &ThreatProfile,
    state: &BattleState,
    context: &BattleContext,
) -> u8 {
    let available = state.player_pills as i32;
    let base = (card.total() / 4).min(available);

    let stage_adjustment = match context.stage {
        Stage::Early => -1,
        Stage::Mid => 0,
        Stage::Late => 2,
    };

    let life_diff = state.life_diff();
    let life_adjustment = if life_diff < -4 {
        2
    } else if life_diff > 4 {
        -1
    } else {
        0
    };

    let threat_adjustment = if threat.threat_level > 0.7 { 1 } else { 0 };

    (base + stage_adjustment + life_adjustment + threat_adjustment).clamp(0, available) as u8
}

// ── Win probability ────────────────────────────────────────────────────

/// Estimated chance the play wins the round, in `[0.05, 0.95]` and rounded
/// to two decimals.
pub fn win_probability(card: &Card, pills: u8, state: &BattleState, context: &BattleContext) -> f64 {
    let card_strength = (card.total() + pills as i32) as f64;
    let life_advantage = state.life_diff() as f64 / ADVANTAGE_SCALE;
    let pills_advantage = state.pills_diff() as f64 / ADVANTAGE_SCALE;
    let context_bonus = if context.stage == Stage::Late { 0.1 } else { 0.0 };

    let raw = card_strength / STRENGTH_SCALE
        + life_advantage * 0.2
        + pills_advantage * 0.1
        + context_bonus;

    round2(raw.clamp(MIN_WIN_PROBABILITY, MAX_WIN_PROBABILITY))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
