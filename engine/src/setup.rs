// ═══════════════════════════════════════════════════════════════════════
// Battle setup — seeded random battle snapshots
//
// Produces reproducible BattleStates for simulation runs and invariant
// tests. The same seed always yields the same snapshot.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Cards in a full hand at the start of a battle.
pub const HAND_SIZE: usize = 4;

/// Build a random card. Stats stay inside the ranges seen on real cards.
pub fn random_card(rng: &mut impl Rng, id: String) -> Card {
    let clan = Clan::ALL.choose(rng).cloned().unwrap_or(Clan::Bangers);
    let rarity = *Rarity::ALL.choose(rng).unwrap_or(&Rarity::Common);
    let has_ability = rng.gen_bool(0.5);
    let ability = has_ability.then(|| crate::clans::bonus_text(&clan).unwrap_or("").to_string());
    Card {
        name: format!("{} {}", clan, id),
        id,
        clan,
        rarity,
        level: rng.gen_range(1..=5),
        power: rng.gen_range(1..=10),
        damage: rng.gen_range(1..=8),
        ability,
        ability_description: None,
        image_url: None,
        owned: false,
    }
}

/// Create a mid-battle snapshot from a seed.
///
/// History length and remaining hand sizes stay consistent with each other
/// (one card per side per round). Roughly one snapshot in ten has an empty
/// opponent hand to exercise the no-threat path.
pub fn random_battle(seed: u64) -> BattleState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let rounds_played = rng.gen_range(0..HAND_SIZE);
    let remaining = HAND_SIZE - rounds_played;
    let opponent_remaining = if rng.gen_bool(0.1) { 0 } else { remaining };

    let player_cards: Vec<Card> = (0..remaining)
        .map(|i| {
            let mut card = random_card(&mut rng, format!("p-{}", i));
            card.owned = true;
            card
        })
        .collect();
    let opponent_cards: Vec<Card> = (0..opponent_remaining)
        .map(|i| random_card(&mut rng, format!("o-{}", i)))
        .collect();

    let history: Vec<BattleRound> = (0..rounds_played)
        .map(|r| BattleRound {
            round: r as u8 + 1,
            player_card: Some(random_card(&mut rng, format!("hp-{}", r))),
            opponent_card: Some(random_card(&mut rng, format!("ho-{}", r))),
            player_pills: rng.gen_range(0..=3),
            opponent_pills: rng.gen_range(0..=3),
            winner: Some(if rng.gen_bool(0.5) { Side::Player } else { Side::Opponent }),
            damage: rng.gen_range(1..=8),
        })
        .collect();

    BattleState {
        id: format!("sim-{}", seed),
        player_cards,
        opponent_cards,
        current_round: rounds_played as u8 + 1,
        player_life: rng.gen_range(0..=MAX_LIFE),
        opponent_life: rng.gen_range(0..=MAX_LIFE),
        player_pills: rng.gen_range(0..=MAX_PILLS),
        opponent_pills: rng.gen_range(0..=MAX_PILLS),
        game_phase: GamePhase::Battle,
        history,
    }
}
