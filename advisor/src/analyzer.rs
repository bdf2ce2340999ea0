// ═══════════════════════════════════════════════════════════════════════
// Battle Analyzer — the production advisor
//
// Pipeline (each step feeds the next):
//   1. context: stage, power balance, card and pill advantage
//   2. evaluation: score and rank the player's cards
//   3. threat: profile the opponent's hand
//   4. decision: pick a card, then pills, then win probability
//   5. explanation: reasoning, alternatives, confidence
// ═══════════════════════════════════════════════════════════════════════

use crate::advisor::Advisor;
use crate::context::analyze_context;
use crate::decision::{optimal_pills, select_card, win_probability};
use crate::error::{AdvisorError, Result};
use crate::evaluation::evaluate_cards;
use crate::explain::{alternatives, confidence, strategic_reasoning};
use crate::recommendation::{BattleRecommendation, ModelInfo};
use crate::threat::assess_threat;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};
use ur_engine::types::{BattleState, MAX_LIFE, MAX_PILLS};

pub const MODEL_NAME: &str = "Advanced Battle Analyzer";
pub const MODEL_VERSION: &str = "2.0.0";
pub const CAPABILITIES: [&str; 3] = ["card_analysis", "threat_assessment", "strategic_planning"];

/// Heuristic battle advisor. Holds nothing but its ready flag, so a single
/// instance can serve concurrent requests.
#[derive(Debug, Default)]
pub struct BattleAnalyzer {
    loaded: AtomicBool,
}

impl BattleAnalyzer {
    pub fn new() -> Self {
        BattleAnalyzer { loaded: AtomicBool::new(false) }
    }

    /// Convenience constructor for callers that have nothing to wait for.
    pub fn loaded() -> Self {
        let analyzer = BattleAnalyzer::new();
        analyzer.load();
        analyzer
    }

    pub fn model_info() -> ModelInfo {
        ModelInfo {
            name: MODEL_NAME.to_string(),
            version: MODEL_VERSION.to_string(),
            capabilities: CAPABILITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Advisor for BattleAnalyzer {
    fn name(&self) -> &str { MODEL_NAME }

    fn load(&self) -> ModelInfo {
        if !self.loaded.swap(true, Ordering::AcqRel) {
            info!(model = MODEL_NAME, version = MODEL_VERSION, "battle model loaded");
        }
        BattleAnalyzer::model_info()
    }

    fn is_ready(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    fn recommend(&self, state: &BattleState) -> Result<BattleRecommendation> {
        if !self.is_ready() {
            return Err(AdvisorError::NotReady);
        }
        validate(state)?;

        let context = analyze_context(state);
        debug!(
            stage = %context.stage,
            power_balance = context.power_balance,
            card_advantage = context.card_advantage,
            pills_advantage = context.pills_advantage,
            "battle context"
        );

        let ranked = evaluate_cards(&state.player_cards, &context);
        let threat = assess_threat(&state.opponent_cards, state);
        debug!(threat_level = threat.threat_level, counters = ?threat.counters, "opponent threat");

        let chosen = select_card(&ranked, &threat, &context)
            .ok_or_else(|| AdvisorError::invalid("no playable cards remaining"))?;
        let card = &chosen.card;
        let pills = optimal_pills(card, &threat, state, &context);
        let probability = win_probability(card, pills, state, &context);
        debug!(card = %card.name, score = chosen.score, pills, probability, "selected play");

        Ok(BattleRecommendation {
            recommended_card: card.clone(),
            recommended_pills: pills,
            win_probability: probability,
            reasoning: strategic_reasoning(card, pills, &context, &threat),
            alternatives: alternatives(&ranked, card, &threat, state, &context),
            confidence: confidence(&context, &ranked, &threat),
        })
    }
}

/// Structural checks on a snapshot from the page sensor. An empty opponent
/// hand is fine; the threat profile treats it as no threat.
pub fn validate(state: &BattleState) -> Result<()> {
    if state.player_cards.is_empty() {
        return Err(AdvisorError::invalid("no playable cards remaining"));
    }
    if state.player_life > MAX_LIFE || state.opponent_life > MAX_LIFE {
        return Err(AdvisorError::invalid(format!(
            "life out of range (player {}, opponent {}, max {})",
            state.player_life, state.opponent_life, MAX_LIFE
        )));
    }
    if state.player_pills > MAX_PILLS || state.opponent_pills > MAX_PILLS {
        return Err(AdvisorError::invalid(format!(
            "pills out of range (player {}, opponent {}, max {})",
            state.player_pills, state.opponent_pills, MAX_PILLS
        )));
    }
    Ok(())
}
