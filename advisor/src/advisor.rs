// ═══════════════════════════════════════════════════════════════════════
// Advisor trait — interface the request dispatcher programs against
//
// An advisor is loaded once, then answers any number of recommendation
// requests. Implementations must be reentrant: the dispatcher shares one
// instance across threads and never serialises calls to `recommend`.
// ═══════════════════════════════════════════════════════════════════════

use crate::error::Result;
use crate::recommendation::{BattleRecommendation, ModelInfo};
use ur_engine::types::BattleState;

pub trait Advisor: Send + Sync {
    /// Human-readable name for this advisor.
    fn name(&self) -> &str;

    /// Make the advisor ready. Safe to call more than once.
    fn load(&self) -> ModelInfo;

    fn is_ready(&self) -> bool;

    /// Recommend the next play for `state`.
    ///
    /// Fails with `NotReady` before `load` and with `InvalidState` when the
    /// snapshot cannot support a recommendation.
    fn recommend(&self, state: &BattleState) -> Result<BattleRecommendation>;
}
