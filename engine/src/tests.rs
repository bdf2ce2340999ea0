// ═══════════════════════════════════════════════════════════════════════
// Test suite for the battle model
// ═══════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use crate::types::*;
    use crate::clans;
    use crate::setup::{random_battle, HAND_SIZE};

    fn card(id: &str, clan: Clan, power: u8, damage: u8) -> Card {
        Card {
            id: id.to_string(),
            name: id.to_string(),
            clan,
            rarity: Rarity::Common,
            level: 1,
            power,
            damage,
            ability: None,
            ability_description: None,
            image_url: None,
            owned: true,
        }
    }

    // ═════════════════════════════════════════════════════════════════════
    // CLAN TESTS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_clan_count() {
        assert_eq!(Clan::ALL.len(), 18);
    }

    #[test]
    fn test_clan_display_names() {
        assert_eq!(Clan::Gheist.to_string(), "GHEIST");
        assert_eq!(Clan::FangPiClang.to_string(), "Fang Pi Clang");
        assert_eq!(Clan::LaJunta.to_string(), "La Junta");
    }

    #[test]
    fn test_clan_from_name() {
        for clan in Clan::ALL.iter() {
            assert_eq!(&Clan::from(clan.name().to_string()), clan);
        }
        assert_eq!(Clan::from("Vortex".to_string()), Clan::Other("Vortex".to_string()));
    }

    #[test]
    fn test_every_known_clan_has_bonus_text() {
        for clan in Clan::ALL.iter() {
            assert!(clans::bonus_text(clan).is_some(), "{} should have bonus text", clan);
        }
        assert!(clans::bonus_text(&Clan::Other("Vortex".into())).is_none());
    }

    #[test]
    fn test_bonus_weights() {
        assert_eq!(clans::bonus_weight(&Clan::Bangers), 2);
        assert_eq!(clans::bonus_weight(&Clan::Montana), 3);
        assert_eq!(clans::bonus_weight(&Clan::Skeelz), 3);
        assert_eq!(clans::bonus_weight(&Clan::Gheist), 2);
        assert_eq!(clans::bonus_weight(&Clan::Nightmare), 0);
        assert_eq!(clans::bonus_weight(&Clan::Junkz), 0);

        let weighted = Clan::ALL.iter().filter(|c| clans::bonus_weight(c) > 0).count();
        assert_eq!(weighted, 9);
    }

    // ═════════════════════════════════════════════════════════════════════
    // CARD TESTS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_card_total() {
        assert_eq!(card("a", Clan::Bangers, 8, 6).total(), 14);
    }

    #[test]
    fn test_card_ability_flag() {
        let mut c = card("a", Clan::Bangers, 8, 6);
        assert!(!c.has_ability());
        c.ability = Some(String::new());
        assert!(!c.has_ability());
        c.ability = Some("+2 Power".into());
        assert!(c.has_ability());
    }

    // ═════════════════════════════════════════════════════════════════════
    // WIRE FORMAT TESTS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_battle_state_from_camel_case_json() {
        let json = r#"{
            "id": "test-battle-1",
            "playerCards": [
                { "id": "card-1", "name": "Kolos", "clan": "Bangers", "rarity": "Rare",
                  "level": 5, "power": 8, "damage": 6, "ability": "+2 Power", "owned": true }
            ],
            "opponentCards": [
                { "id": "opp-1", "name": "Elvira", "clan": "Nightmare", "rarity": "Rare",
                  "level": 5, "power": 7, "damage": 7, "owned": false }
            ],
            "currentRound": 1,
            "playerLife": 12,
            "opponentLife": 12,
            "playerPills": 12,
            "opponentPills": 12,
            "gamePhase": "battle",
            "history": []
        }"#;
        let state = BattleState::from_json(json).expect("valid state");
        assert_eq!(state.player_cards[0].clan, Clan::Bangers);
        assert_eq!(state.player_cards[0].ability.as_deref(), Some("+2 Power"));
        assert_eq!(state.opponent_cards[0].ability, None);
        assert_eq!(state.game_phase, GamePhase::Battle);
        assert_eq!(state.player_strength(), 14);
        assert_eq!(state.opponent_strength(), 14);
    }

    #[test]
    fn test_battle_state_defaults() {
        let state = BattleState::from_json("{}").expect("empty object is a valid state");
        assert_eq!(state.current_round, 1);
        assert_eq!(state.player_life, DEFAULT_LIFE);
        assert_eq!(state.opponent_pills, DEFAULT_PILLS);
        assert!(state.player_cards.is_empty());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_placeholder_history_rounds() {
        let state = BattleState::from_json(r#"{ "history": [{}, {}, {}] }"#).expect("placeholders decode");
        assert_eq!(state.rounds_played(), 3);
        assert!(state.history[0].player_card.is_none());
        assert!(state.history[0].winner.is_none());
    }

    #[test]
    fn test_unknown_clan_survives_round_trip() {
        let json = r#"{ "id": "x", "name": "X", "clan": "Vortex", "rarity": "Common",
                        "level": 1, "power": 3, "damage": 3 }"#;
        let c: Card = serde_json::from_str(json).expect("unknown clan is tolerated");
        assert_eq!(c.clan, Clan::Other("Vortex".into()));
        let out = serde_json::to_value(&c).expect("serializes");
        assert_eq!(out["clan"], "Vortex");
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let mut c = card("a", Clan::LaJunta, 5, 5);
        c.ability_description = Some("desc".into());
        let out = serde_json::to_value(&c).expect("serializes");
        assert_eq!(out["clan"], "La Junta");
        assert_eq!(out["abilityDescription"], "desc");
        assert!(out.get("imageUrl").is_none());
    }

    #[test]
    fn test_negative_stat_rejected() {
        let json = r#"{ "id": "x", "name": "X", "clan": "Bangers", "rarity": "Common",
                        "level": 1, "power": -3, "damage": 3 }"#;
        assert!(serde_json::from_str::<Card>(json).is_err());
    }

    // ═════════════════════════════════════════════════════════════════════
    // DIFF HELPERS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_life_and_pill_diffs() {
        let mut state = BattleState::new(vec![], vec![]);
        state.player_life = 4;
        state.opponent_pills = 7;
        assert_eq!(state.life_diff(), -8);
        assert_eq!(state.pills_diff(), 5);
    }

    // ═════════════════════════════════════════════════════════════════════
    // SETUP TESTS
    // ═════════════════════════════════════════════════════════════════════

    #[test]
    fn test_random_battle_is_deterministic() {
        assert_eq!(random_battle(42), random_battle(42));
        assert_ne!(random_battle(42), random_battle(43));
    }

    #[test]
    fn test_random_battle_respects_limits() {
        for seed in 0..500 {
            let state = random_battle(seed);
            assert!(!state.player_cards.is_empty());
            assert!(state.player_cards.len() <= HAND_SIZE);
            assert_eq!(state.player_cards.len() + state.rounds_played(), HAND_SIZE);
            assert_eq!(state.current_round as usize, state.rounds_played() + 1);
            assert!(state.player_life <= MAX_LIFE && state.opponent_life <= MAX_LIFE);
            assert!(state.player_pills <= MAX_PILLS && state.opponent_pills <= MAX_PILLS);
        }
    }

    #[test]
    fn test_random_battle_sometimes_empty_opponent() {
        let empty = (0..500).filter(|&s| random_battle(s).opponent_cards.is_empty()).count();
        assert!(empty > 0, "seed sweep should include an empty opponent hand");
    }
}
