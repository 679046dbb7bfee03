#![allow(dead_code)]
use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gear rarity ladder, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GearRarity {
    Normal = 0,
    Unique = 1,
    Well = 2,
    Rare = 3,
    Mythic = 4,
    Epic = 5,
    Legendary = 6,
    Immortal = 7,
    Supreme = 8,
    Radiant = 9,
    Eternal = 10,
}

impl GearRarity {
    pub const ALL: [GearRarity; 11] = [
        GearRarity::Normal,
        GearRarity::Unique,
        GearRarity::Well,
        GearRarity::Rare,
        GearRarity::Mythic,
        GearRarity::Epic,
        GearRarity::Legendary,
        GearRarity::Immortal,
        GearRarity::Supreme,
        GearRarity::Radiant,
        GearRarity::Eternal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GearRarity::Normal => "Normal",
            GearRarity::Unique => "Unique",
            GearRarity::Well => "Well",
            GearRarity::Rare => "Rare",
            GearRarity::Mythic => "Mythic",
            GearRarity::Epic => "Epic",
            GearRarity::Legendary => "Legendary",
            GearRarity::Immortal => "Immortal",
            GearRarity::Supreme => "Supreme",
            GearRarity::Radiant => "Radiant",
            GearRarity::Eternal => "Eternal",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Maps a resolved tier index to a rarity, clamping out-of-range
    /// indices to Eternal.
    pub fn from_index(index: usize) -> GearRarity {
        GearRarity::ALL[index.min(GearRarity::ALL.len() - 1)]
    }

    pub fn multiplier(&self) -> f64 {
        GEAR_RARITY_MULTIPLIERS[self.index()]
    }
}

/// The ten equipment slots a player can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GearSlot {
    Pistol,
    Rifle,
    Helmet,
    Armor,
    Boots,
    Gloves,
    Shield,
    Accessory1,
    Accessory2,
    Accessory3,
}

impl GearSlot {
    pub const ALL: [GearSlot; 10] = [
        GearSlot::Pistol,
        GearSlot::Rifle,
        GearSlot::Helmet,
        GearSlot::Armor,
        GearSlot::Boots,
        GearSlot::Gloves,
        GearSlot::Shield,
        GearSlot::Accessory1,
        GearSlot::Accessory2,
        GearSlot::Accessory3,
    ];
}

/// Level scaling shared by stat contributions and sell value.
pub fn gear_level_multiplier(gear_level: u32) -> f64 {
    f64::powf(gear_level.max(1) as f64, GEAR_LEVEL_EXPONENT)
}

/// One rolled piece of gear. Pieces are slot-agnostic; the equipment map
/// decides where a piece sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearPiece {
    pub id: String,
    pub name: String,
    pub rarity: GearRarity,
    pub gear_level: u32,
    pub power_bonus: u32,
    pub health_bonus: u32,
    pub speed_bonus: u32,
}

impl GearPiece {
    pub fn new(
        rarity: GearRarity,
        gear_level: u32,
        power_bonus: u32,
        health_bonus: u32,
        speed_bonus: u32,
    ) -> Self {
        GearPiece {
            id: Uuid::new_v4().to_string(),
            name: format!("{} Gear +{}", rarity.name(), gear_level),
            rarity,
            gear_level,
            power_bonus,
            health_bonus,
            speed_bonus,
        }
    }

    fn scaled(&self, base: u32) -> u32 {
        (base as f64 * self.rarity.multiplier() * gear_level_multiplier(self.gear_level)).round()
            as u32
    }

    /// Power contribution after rarity and level scaling.
    pub fn final_power(&self) -> u32 {
        self.scaled(self.power_bonus)
    }

    pub fn final_health(&self) -> u32 {
        self.scaled(self.health_bonus)
    }

    pub fn final_speed(&self) -> u32 {
        self.scaled(self.speed_bonus)
    }

    /// Credits received when this piece is sold.
    pub fn sell_value(&self) -> u64 {
        let base_worth = self.power_bonus as f64 * GEAR_SELL_POWER_WEIGHT
            + self.health_bonus as f64 * GEAR_SELL_HEALTH_WEIGHT
            + self.speed_bonus as f64 * GEAR_SELL_SPEED_WEIGHT;
        (base_worth
            * self.rarity.multiplier()
            * gear_level_multiplier(self.gear_level)
            * GEAR_SELL_SCALE)
            .round() as u64
    }

    /// Raises the piece one level and rolls 50% of the current power bonus
    /// into it.
    pub fn upgrade(&mut self) {
        self.gear_level += 1;
        self.power_bonus += (self.power_bonus as f64 * GEAR_UPGRADE_POWER_BONUS).round() as u32;
        self.name = format!("{} Gear +{}", self.rarity.name(), self.gear_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_multiplier_ladder() {
        assert!((GearRarity::Normal.multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((GearRarity::Eternal.multiplier() - 4.5).abs() < f64::EPSILON);
        for pair in GearRarity::ALL.windows(2) {
            assert!(pair[1].multiplier() > pair[0].multiplier());
        }
    }

    #[test]
    fn test_from_index_clamps_to_eternal() {
        assert_eq!(GearRarity::from_index(0), GearRarity::Normal);
        assert_eq!(GearRarity::from_index(10), GearRarity::Eternal);
        assert_eq!(GearRarity::from_index(50), GearRarity::Eternal);
    }

    #[test]
    fn test_level_multiplier_floors_at_level_one() {
        assert!((gear_level_multiplier(0) - 1.0).abs() < f64::EPSILON);
        assert!((gear_level_multiplier(1) - 1.0).abs() < f64::EPSILON);
        assert!(gear_level_multiplier(2) > gear_level_multiplier(1));
    }

    #[test]
    fn test_final_stats_scale_with_rarity_and_level() {
        let piece = GearPiece::new(GearRarity::Normal, 1, 10, 20, 3);
        assert_eq!(piece.final_power(), 10);
        assert_eq!(piece.final_health(), 20);
        assert_eq!(piece.final_speed(), 3);

        let eternal = GearPiece::new(GearRarity::Eternal, 1, 10, 20, 3);
        assert_eq!(eternal.final_power(), 45);
    }

    #[test]
    fn test_sell_value_weighs_speed_heaviest() {
        // Level 1 Normal: worth = p*2 + h*0.5 + s*3, then * 0.25.
        let piece = GearPiece::new(GearRarity::Normal, 1, 10, 20, 4);
        assert_eq!(
            piece.sell_value(),
            ((20.0 + 10.0 + 12.0) * 0.25_f64).round() as u64
        );
    }

    #[test]
    fn test_upgrade_adds_half_power_and_renames() {
        let mut piece = GearPiece::new(GearRarity::Rare, 3, 10, 5, 2);
        piece.upgrade();
        assert_eq!(piece.gear_level, 4);
        assert_eq!(piece.power_bonus, 15);
        assert_eq!(piece.health_bonus, 5);
        assert!(piece.name.ends_with("+4"));
    }

    #[test]
    fn test_gear_ids_are_unique() {
        let a = GearPiece::new(GearRarity::Normal, 1, 1, 1, 1);
        let b = GearPiece::new(GearRarity::Normal, 1, 1, 1, 1);
        assert_ne!(a.id, b.id);
    }
}
