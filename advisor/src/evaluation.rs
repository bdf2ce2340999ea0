// ═══════════════════════════════════════════════════════════════════════
// Card evaluation — scores every playable card for the current context
//
// score = power + damage
//       + clan weight
//       + stage modifier      (+2 early & power > 7, +2 late & damage > 6)
//       + situational value   (+2 behind on power & power > 6,
//                              +1 behind on pills & damage > 5)
// ═══════════════════════════════════════════════════════════════════════

use crate::context::{BattleContext, Stage};
use serde::Serialize;
use ur_engine::clans;
use ur_engine::types::Card;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAnalysis {
    pub card: Card,
    pub score: i32,
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub synergy: i32,
}

/// Score every card and rank them best first. Equal scores keep the
/// order the cards were given in.
pub fn evaluate_cards(cards: &[Card], context: &BattleContext) -> Vec<CardAnalysis> {
    let mut ranked: Vec<CardAnalysis> = cards.iter()
        .map(|card| analyze_card(card, context))
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

pub fn analyze_card(card: &Card, context: &BattleContext) -> CardAnalysis {
    let clan_bonus = clans::bonus_weight(&card.clan);
    let score = card.total()
        + clan_bonus
        + stage_modifier(card, context.stage)
        + situational_value(card, context);

    CardAnalysis {
        card: card.clone(),
        score,
        strengths: strengths(card),
        weaknesses: weaknesses(card),
        synergy: clan_bonus,
    }
}

fn stage_modifier(card: &Card, stage: Stage) -> i32 {
    match stage {
        Stage::Early if card.power > 7 => 2,
        Stage::Late if card.damage > 6 => 2,
        _ => 0,
    }
}

fn situational_value(card: &Card, context: &BattleContext) -> i32 {
    let mut value = 0;
    if context.power_balance < 0.0 && card.power > 6 {
        value += 2;
    }
    if context.pills_advantage < 0 && card.damage > 5 {
        value += 1;
    }
    value
}

// ── Display tags ───────────────────────────────────────────────────────

fn strengths(card: &Card) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if card.power >= 8 { tags.push("High Power"); }
    if card.damage >= 6 { tags.push("High Damage"); }
    if card.has_ability() { tags.push("Special Ability"); }
    tags
}

fn weaknesses(card: &Card) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if card.power <= 4 { tags.push("Low Power"); }
    if card.damage <= 2 { tags.push("Low Damage"); }
    tags
}
