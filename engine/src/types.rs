// ═══════════════════════════════════════════════════════════════════════
// Core types — cards, clans and the battle snapshot handed to the advisor
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Limits ─────────────────────────────────────────────────────────────

pub const MAX_LIFE: u8 = 24;
pub const MAX_PILLS: u8 = 12;
pub const DEFAULT_LIFE: u8 = 12;
pub const DEFAULT_PILLS: u8 = 12;

// ── Enums ──────────────────────────────────────────────────────────────

/// The factions a card can belong to.
///
/// Serialized as the in-game display name. Names the sensor reports that
/// are not in the fixed list survive as `Other` rather than failing the
/// whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Clan {
    AllStars,
    Bangers,
    FangPiClang,
    Freaks,
    UluWatu,
    Montana,
    Uppers,
    Sakrohm,
    Nightmare,
    Piranas,
    Skeelz,
    Roots,
    Gheist,
    Pussycats,
    Rescue,
    Sentinels,
    LaJunta,
    Junkz,
    Other(String),
}

impl Clan {
    pub const ALL: [Clan; 18] = [
        Clan::AllStars,
        Clan::Bangers,
        Clan::FangPiClang,
        Clan::Freaks,
        Clan::UluWatu,
        Clan::Montana,
        Clan::Uppers,
        Clan::Sakrohm,
        Clan::Nightmare,
        Clan::Piranas,
        Clan::Skeelz,
        Clan::Roots,
        Clan::Gheist,
        Clan::Pussycats,
        Clan::Rescue,
        Clan::Sentinels,
        Clan::LaJunta,
        Clan::Junkz,
    ];

    pub fn name(&self) -> &str {
        match self {
            Clan::AllStars => "All Stars",
            Clan::Bangers => "Bangers",
            Clan::FangPiClang => "Fang Pi Clang",
            Clan::Freaks => "Freaks",
            Clan::UluWatu => "Ulu Watu",
            Clan::Montana => "Montana",
            Clan::Uppers => "Uppers",
            Clan::Sakrohm => "Sakrohm",
            Clan::Nightmare => "Nightmare",
            Clan::Piranas => "Piranas",
            Clan::Skeelz => "Skeelz",
            Clan::Roots => "Roots",
            Clan::Gheist => "GHEIST",
            Clan::Pussycats => "Pussycats",
            Clan::Rescue => "Rescue",
            Clan::Sentinels => "Sentinels",
            Clan::LaJunta => "La Junta",
            Clan::Junkz => "Junkz",
            Clan::Other(name) => name,
        }
    }
}

impl From<String> for Clan {
    fn from(name: String) -> Self {
        Clan::ALL
            .iter()
            .find(|c| c.name() == name)
            .cloned()
            .unwrap_or(Clan::Other(name))
    }
}

impl From<Clan> for String {
    fn from(clan: Clan) -> Self {
        match clan {
            Clan::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl std::fmt::Display for Clan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Legendary];
}

/// Screen the battle page is on when the snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Selection,
    #[default]
    Battle,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

// ── Card ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub clan: Clan,
    pub rarity: Rarity,
    pub level: u8,
    pub power: u8,
    pub damage: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub owned: bool,
}

impl Card {
    /// Power plus damage, the raw combined stat most heuristics start from.
    pub fn total(&self) -> i32 {
        self.power as i32 + self.damage as i32
    }

    pub fn has_ability(&self) -> bool {
        self.ability.as_deref().is_some_and(|a| !a.is_empty())
    }
}

// ── Battle history ─────────────────────────────────────────────────────

/// One resolved exchange. Every field is optional on the wire because the
/// page scraper sometimes records a round before it can read the cards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattleRound {
    pub round: u8,
    pub player_card: Option<Card>,
    pub opponent_card: Option<Card>,
    pub player_pills: u8,
    pub opponent_pills: u8,
    pub winner: Option<Side>,
    pub damage: u8,
}

// ── Battle state ───────────────────────────────────────────────────────

/// Snapshot of a battle in progress. Card lists hold only cards that can
/// still be played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleState {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub player_cards: Vec<Card>,
    #[serde(default)]
    pub opponent_cards: Vec<Card>,
    #[serde(default = "first_round")]
    pub current_round: u8,
    #[serde(default = "default_life")]
    pub player_life: u8,
    #[serde(default = "default_life")]
    pub opponent_life: u8,
    #[serde(default = "default_pills")]
    pub player_pills: u8,
    #[serde(default = "default_pills")]
    pub opponent_pills: u8,
    #[serde(default)]
    pub game_phase: GamePhase,
    #[serde(default)]
    pub history: Vec<BattleRound>,
}

fn first_round() -> u8 { 1 }
fn default_life() -> u8 { DEFAULT_LIFE }
fn default_pills() -> u8 { DEFAULT_PILLS }

impl BattleState {
    /// Fresh battle: round 1, full life and pills, nothing played yet.
    pub fn new(player_cards: Vec<Card>, opponent_cards: Vec<Card>) -> Self {
        BattleState {
            id: String::new(),
            player_cards,
            opponent_cards,
            current_round: 1,
            player_life: DEFAULT_LIFE,
            opponent_life: DEFAULT_LIFE,
            player_pills: DEFAULT_PILLS,
            opponent_pills: DEFAULT_PILLS,
            game_phase: GamePhase::Battle,
            history: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Player life minus opponent life.
    pub fn life_diff(&self) -> i32 {
        self.player_life as i32 - self.opponent_life as i32
    }

    /// Player pill pool minus opponent pill pool.
    pub fn pills_diff(&self) -> i32 {
        self.player_pills as i32 - self.opponent_pills as i32
    }

    pub fn player_strength(&self) -> i32 {
        self.player_cards.iter().map(Card::total).sum()
    }

    pub fn opponent_strength(&self) -> i32 {
        self.opponent_cards.iter().map(Card::total).sum()
    }
}
