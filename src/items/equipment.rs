use super::types::{GearPiece, GearSlot};
use serde::{Deserialize, Serialize};

/// Player gear slots. Pieces are slot-agnostic; whichever slot a pull is
/// equipped into determines nothing about its stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub pistol: Option<GearPiece>,
    pub rifle: Option<GearPiece>,
    pub helmet: Option<GearPiece>,
    pub armor: Option<GearPiece>,
    pub boots: Option<GearPiece>,
    pub gloves: Option<GearPiece>,
    pub shield: Option<GearPiece>,
    pub accessory_1: Option<GearPiece>,
    pub accessory_2: Option<GearPiece>,
    pub accessory_3: Option<GearPiece>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            pistol: None,
            rifle: None,
            helmet: None,
            armor: None,
            boots: None,
            gloves: None,
            shield: None,
            accessory_1: None,
            accessory_2: None,
            accessory_3: None,
        }
    }

    pub fn get(&self, slot: GearSlot) -> &Option<GearPiece> {
        match slot {
            GearSlot::Pistol => &self.pistol,
            GearSlot::Rifle => &self.rifle,
            GearSlot::Helmet => &self.helmet,
            GearSlot::Armor => &self.armor,
            GearSlot::Boots => &self.boots,
            GearSlot::Gloves => &self.gloves,
            GearSlot::Shield => &self.shield,
            GearSlot::Accessory1 => &self.accessory_1,
            GearSlot::Accessory2 => &self.accessory_2,
            GearSlot::Accessory3 => &self.accessory_3,
        }
    }

    /// Puts a piece into a slot and hands back whatever was there.
    pub fn replace(&mut self, slot: GearSlot, piece: Option<GearPiece>) -> Option<GearPiece> {
        let target = match slot {
            GearSlot::Pistol => &mut self.pistol,
            GearSlot::Rifle => &mut self.rifle,
            GearSlot::Helmet => &mut self.helmet,
            GearSlot::Armor => &mut self.armor,
            GearSlot::Boots => &mut self.boots,
            GearSlot::Gloves => &mut self.gloves,
            GearSlot::Shield => &mut self.shield,
            GearSlot::Accessory1 => &mut self.accessory_1,
            GearSlot::Accessory2 => &mut self.accessory_2,
            GearSlot::Accessory3 => &mut self.accessory_3,
        };
        std::mem::replace(target, piece)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &GearPiece> {
        [
            &self.pistol,
            &self.rifle,
            &self.helmet,
            &self.armor,
            &self.boots,
            &self.gloves,
            &self.shield,
            &self.accessory_1,
            &self.accessory_2,
            &self.accessory_3,
        ]
        .into_iter()
        .filter_map(|piece| piece.as_ref())
    }

    pub fn equipped_count(&self) -> usize {
        self.iter_equipped().count()
    }

    /// First slot with nothing in it, scanning in declaration order.
    pub fn first_empty_slot(&self) -> Option<GearSlot> {
        GearSlot::ALL.into_iter().find(|&slot| self.get(slot).is_none())
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::GearRarity;

    fn piece(rarity: GearRarity) -> GearPiece {
        GearPiece::new(rarity, 1, 10, 20, 3)
    }

    #[test]
    fn test_new_equipment_is_empty() {
        let equipment = Equipment::new();
        assert_eq!(equipment.equipped_count(), 0);
        assert_eq!(equipment.first_empty_slot(), Some(GearSlot::Pistol));
    }

    #[test]
    fn test_replace_returns_displaced_piece() {
        let mut equipment = Equipment::new();
        let first = piece(GearRarity::Normal);
        let second = piece(GearRarity::Rare);

        assert!(equipment.replace(GearSlot::Helmet, Some(first.clone())).is_none());
        let displaced = equipment.replace(GearSlot::Helmet, Some(second.clone()));
        assert_eq!(displaced, Some(first));
        assert_eq!(equipment.get(GearSlot::Helmet), &Some(second));
    }

    #[test]
    fn test_iter_equipped_skips_empty_slots() {
        let mut equipment = Equipment::new();
        equipment.replace(GearSlot::Pistol, Some(piece(GearRarity::Normal)));
        equipment.replace(GearSlot::Accessory3, Some(piece(GearRarity::Epic)));
        assert_eq!(equipment.iter_equipped().count(), 2);
    }

    #[test]
    fn test_first_empty_slot_scans_in_order() {
        let mut equipment = Equipment::new();
        for slot in GearSlot::ALL {
            equipment.replace(slot, Some(piece(GearRarity::Normal)));
        }
        assert_eq!(equipment.first_empty_slot(), None);

        equipment.replace(GearSlot::Gloves, None);
        assert_eq!(equipment.first_empty_slot(), Some(GearSlot::Gloves));
    }
}
