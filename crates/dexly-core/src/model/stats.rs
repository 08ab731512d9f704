// ── Base stats ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Upper bound used to scale stat bars.
pub const MAX_STAT_VALUE: u32 = 255;

/// The six base stats, already normalized (missing values are 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum StatKind {
    #[strum(serialize = "HP")]
    Hp,
    #[strum(serialize = "Attack")]
    Attack,
    #[strum(serialize = "Defense")]
    Defense,
    #[strum(serialize = "Sp. Attack")]
    SpecialAttack,
    #[strum(serialize = "Sp. Defense")]
    SpecialDefense,
    #[strum(serialize = "Speed")]
    Speed,
}

impl StatKind {
    /// Bar width in percent of [`MAX_STAT_VALUE`], capped at 100.
    pub fn bar_percent(value: u32) -> u32 {
        (value.saturating_mul(100) / MAX_STAT_VALUE).min(100)
    }
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    /// `(kind, value)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        <StatKind as strum::IntoEnumIterator>::iter().map(|k| (k, self.get(k)))
    }

    pub fn total(&self) -> u32 {
        self.entries().fold(0, |acc, (_, v)| acc.saturating_add(v))
    }
}
