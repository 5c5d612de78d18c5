use crate::character::components::{User, UserFlags};
use crate::data::catalog::ContentCatalog;
use crate::data::schema::{CharacterClass, GearItem, GearSlotType};
use crate::pins::model::{PinReference, PinType};

pub fn gear(key: &str, slot: GearSlotType, klass: CharacterClass) -> GearItem {
    GearItem {
        key: key.to_string(),
        slot,
        klass,
        text: String::new(),
    }
}

/// slots [weapon, armor]; warrior.weapon = [sword_basic, sword_steel]; warrior.armor = [armor_cloth]
pub fn scenario_catalog() -> ContentCatalog {
    use CharacterClass::*;
    use GearSlotType::*;

    ContentCatalog::new(
        vec![Weapon, Armor],
        vec![
            gear("armor_cloth", Armor, Warrior),
            gear("sword_basic", Weapon, Warrior),
            gear("sword_steel", Weapon, Warrior),
            gear("staff_basic", Weapon, Wizard),
            gear("robe_basic", Armor, Wizard),
        ],
        vec![
            PinReference::new(PinType::Armoire, "armoire"),
            PinReference::new(PinType::Potion, "potion"),
            PinReference::new(PinType::Quests, "quests.dustbunnies"),
        ],
    )
}

/// 四个职业 × 四个槽位，槽位声明顺序与装备出现顺序不同
pub fn wide_catalog() -> ContentCatalog {
    use CharacterClass::*;
    use GearSlotType::*;

    let mut items = Vec::new();
    for slot in [Shield, Head, Armor, Weapon] {
        for klass in [Warrior, Rogue, Wizard, Healer] {
            for tier in 0..3 {
                items.push(gear(&format!("{slot:?}_{klass:?}_{tier}"), slot, klass));
            }
        }
    }
    ContentCatalog::new(vec![Weapon, Armor, Head, Shield], items, vec![])
}

/// 已选职业的用户
pub fn user_with_class(class: CharacterClass) -> User {
    User {
        class: Some(class),
        flags: UserFlags {
            class_selected: true,
        },
        ..Default::default()
    }
}

pub fn warrior_owning(keys: &[&str]) -> User {
    let mut user = user_with_class(CharacterClass::Warrior);
    for key in keys {
        user.mark_owned(key);
    }
    user
}

pub fn paths(pins: &[PinReference]) -> Vec<&str> {
    pins.iter().map(|p| p.path.as_str()).collect()
}
