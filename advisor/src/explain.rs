// ═══════════════════════════════════════════════════════════════════════
// Explanation — reasoning text, ranked alternatives, confidence
// ═══════════════════════════════════════════════════════════════════════

use crate::context::{BattleContext, Stage};
use crate::decision::{optimal_pills, win_probability};
use crate::evaluation::CardAnalysis;
use crate::recommendation::Alternative;
use crate::threat::ThreatProfile;
use ur_engine::clans;
use ur_engine::types::{BattleState, Card};

pub const MIN_CONFIDENCE: f64 = 0.3;
pub const MAX_CONFIDENCE: f64 = 0.95;
pub const MAX_ALTERNATIVES: usize = 2;

// ── Reasoning ──────────────────────────────────────────────────────────

pub fn strategic_reasoning(card: &Card, pills: u8, context: &BattleContext, threat: &ThreatProfile) -> String {
    let mut parts = vec![format!("{} is optimal with {} pills", card.name, pills)];

    match context.stage {
        Stage::Early => parts.push("conserving resources for later rounds".to_string()),
        Stage::Late => parts.push("maximizing final round impact".to_string()),
        Stage::Mid => {}
    }

    if threat.threat_level > 0.7 {
        parts.push("countering high opponent threat".to_string());
    }

    if let Some(bonus) = clans::bonus_text(&card.clan) {
        parts.push(format!("utilizing {} clan bonus: {}", card.clan, bonus));
    }

    parts.join(", ") + "."
}

// ── Alternatives ───────────────────────────────────────────────────────

/// The next best cards after `chosen`, each with its own pill count and
/// odds computed exactly as for the main recommendation.
pub fn alternatives(
    ranked: &[CardAnalysis],
    chosen: &Card,
    threat: &ThreatProfile,
    state: &BattleState,
    context: &BattleContext,
) -> Vec<Alternative> {
    ranked.iter()
        .filter(|a| a.card.id != chosen.id)
        .take(MAX_ALTERNATIVES)
        .map(|a| {
            let pills = optimal_pills(&a.card, threat, state, context);
            Alternative {
                card: a.card.clone(),
                pills,
                probability: win_probability(&a.card, pills, state, context),
                reasoning: alternative_reasoning(&a.card, context),
            }
        })
        .collect()
}

fn alternative_reasoning(card: &Card, context: &BattleContext) -> String {
    if context.stage == Stage::Early {
        return format!("Conservative {} game strategy with {}", context.stage, card.name);
    }
    let focus = if card.power > card.damage { "power" } else { "damage" };
    format!("Alternative {} game approach focusing on {}", context.stage, focus)
}

// ── Confidence ─────────────────────────────────────────────────────────

/// Blend of how far the top card leads the runner-up, how settled the
/// battle stage is, and how readable the opponent is.
pub fn confidence(context: &BattleContext, ranked: &[CardAnalysis], threat: &ThreatProfile) -> f64 {
    let score_spread = match ranked {
        [first, second, ..] => (first.score - second.score) as f64,
        _ => 0.0,
    };
    let context_clarity = if context.stage == Stage::Late { 0.9 } else { 0.7 };
    let threat_certainty = if threat.threat_level > 0.5 { 0.8 } else { 0.6 };

    (score_spread / 10.0 + context_clarity * 0.3 + threat_certainty * 0.2)
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
