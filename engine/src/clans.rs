// ═══════════════════════════════════════════════════════════════════════
// Clan bonuses — static data
//
// Both tables are calibration constants carried over from the live
// advisor. Their values have no derivation; changing one changes every
// recommendation that touches the clan.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::Clan;

// ── Bonus text ─────────────────────────────────────────────────────────

/// Passive bonus as printed on the card. `None` for clans outside the
/// fixed list.
pub fn bonus_text(clan: &Clan) -> Option<&'static str> {
    let text = match clan {
        Clan::AllStars => "+2 Life",
        Clan::Bangers => "+2 Power",
        Clan::FangPiClang => "+2 Damage",
        Clan::Freaks => "+2 Poison",
        Clan::UluWatu => "+2 Power",
        Clan::Montana => "-12 Opp Attack",
        Clan::Uppers => "-10 Opp Attack",
        Clan::Sakrohm => "-8 Opp Attack",
        Clan::Nightmare => "-2 Opp Life",
        Clan::Piranas => "-2 Opp Power",
        Clan::Skeelz => "Protection: Ability",
        Clan::Roots => "Stop: Ability",
        Clan::Gheist => "Stop: Ability",
        Clan::Pussycats => "Damage = 1",
        Clan::Rescue => "+1 Life per Damage",
        Clan::Sentinels => "+8 Attack",
        Clan::LaJunta => "+2 Damage",
        Clan::Junkz => "+8 Attack",
        Clan::Other(_) => return None,
    };
    Some(text)
}

// ── Bonus weight ───────────────────────────────────────────────────────

/// Score weight of a clan's bonus. Only nine clans carry one.
pub fn bonus_weight(clan: &Clan) -> i32 {
    match clan {
        Clan::AllStars | Clan::Bangers | Clan::FangPiClang => 2,
        Clan::Montana => 3,
        Clan::Uppers | Clan::Sakrohm => 2,
        Clan::Skeelz => 3,
        Clan::Roots | Clan::Gheist => 2,
        _ => 0,
    }
}
