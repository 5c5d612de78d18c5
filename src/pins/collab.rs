//! 核心逻辑依赖的外部协作者：条目解析、官方置顶、本地化

use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::error::PinError;
use super::model::{ItemInfo, PinReference, PinType};
use crate::character::components::User;
use crate::data::catalog::ContentCatalog;

/// 把内容引用解析为 `{path, pinType}`
pub trait ItemInfoResolver {
    fn item_info(
        &self,
        user: &User,
        category: PinType,
        item_key: &str,
        language: Option<&str>,
    ) -> Result<ItemInfo, PinError>;
}

/// 当前用户的官方（策划配置）置顶列表
pub trait OfficialPins {
    fn official_pinned_items(&self, user: &User) -> Vec<PinReference>;
}

pub trait Localizer {
    fn t(&self, key: &str, language: Option<&str>) -> String;
}

impl ItemInfoResolver for ContentCatalog {
    fn item_info(
        &self,
        _user: &User,
        category: PinType,
        item_key: &str,
        _language: Option<&str>,
    ) -> Result<ItemInfo, PinError> {
        let path = match category {
            PinType::MarketGear => match self.gear_by_key(item_key) {
                Some(gear) => gear.path(),
                None => {
                    return Err(PinError::UnknownItem {
                        category,
                        key: item_key.to_string(),
                    });
                }
            },
            PinType::Armoire => "armoire".to_string(),
            PinType::Potion => "potion".to_string(),
            PinType::Gems => "gems".to_string(),
            PinType::Quests => format!("quests.{item_key}"),
            PinType::Eggs => format!("eggs.{item_key}"),
            PinType::HatchingPotions => format!("hatchingPotions.{item_key}"),
            PinType::Food => format!("food.{item_key}"),
            PinType::Background => format!("backgrounds.{item_key}"),
            PinType::MysterySet => format!("mystery.{item_key}"),
            PinType::Card => format!("cardTypes.{item_key}"),
        };

        Ok(ItemInfo {
            key: item_key.to_string(),
            path,
            pin_type: category,
        })
    }
}

impl OfficialPins for ContentCatalog {
    fn official_pinned_items(&self, _user: &User) -> Vec<PinReference> {
        self.official_pinned().to_vec()
    }
}

/// 一次调用所需的全部协作者
#[derive(Clone, Copy)]
pub struct PinServices<'a> {
    pub catalog: &'a ContentCatalog,
    pub resolver: &'a dyn ItemInfoResolver,
    pub official: &'a dyn OfficialPins,
    pub i18n: &'a dyn Localizer,
}

impl<'a> PinServices<'a> {
    /// 解析与官方置顶都由目录提供
    pub fn new(catalog: &'a ContentCatalog, i18n: &'a dyn Localizer) -> Self {
        Self {
            catalog,
            resolver: catalog,
            official: catalog,
            i18n,
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

// language -> key -> text
static MESSAGES: Lazy<HashMap<&'static str, Table>> = Lazy::new(|| {
    HashMap::from([
        (
            "en",
            Table::from([(
                "cannotUnpinArmoirPotion",
                "The Health Potion and Enchanted Armoire can't be unpinned.",
            )]),
        ),
        (
            "de",
            Table::from([(
                "cannotUnpinArmoirPotion",
                "Der Heiltrank und der Verzauberte Schrank können nicht losgelöst werden.",
            )]),
        ),
        (
            "fr",
            Table::from([(
                "cannotUnpinArmoirPotion",
                "La potion de santé et l'armoire enchantée ne peuvent pas être désépinglées.",
            )]),
        ),
        (
            "zh",
            Table::from([("cannotUnpinArmoirPotion", "生命药水和魔法衣橱无法取消置顶。")]),
        ),
    ])
});

fn lookup(language: &str, key: &str) -> Option<&'static str> {
    MESSAGES.get(language)?.get(key).copied()
}

/// 内置静态文案表：请求语言 → en → key 本身
#[derive(Resource, Debug, Clone, Default)]
pub struct Messages;

impl Localizer for Messages {
    fn t(&self, key: &str, language: Option<&str>) -> String {
        language
            .and_then(|lang| lookup(lang, key))
            .or_else(|| lookup("en", key))
            .map_or_else(|| key.to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::{CharacterClass, GearItem, GearSlotType};

    fn catalog() -> ContentCatalog {
        ContentCatalog::new(
            vec![GearSlotType::Weapon],
            vec![GearItem {
                key: "sword_basic".into(),
                slot: GearSlotType::Weapon,
                klass: CharacterClass::Warrior,
                text: String::new(),
            }],
            vec![PinReference::new(PinType::Potion, "potion")],
        )
    }

    #[test]
    fn resolves_gear_and_other_categories() {
        let user = User::default();
        let catalog = catalog();

        let gear = catalog
            .item_info(&user, PinType::MarketGear, "sword_basic", None)
            .unwrap();
        assert_eq!(gear.path, "gear.flat.sword_basic");
        assert_eq!(gear.pin_type, PinType::MarketGear);

        let quest = catalog
            .item_info(&user, PinType::Quests, "dilatory", Some("de"))
            .unwrap();
        assert_eq!(quest.path, "quests.dilatory");
        assert_eq!(
            catalog
                .item_info(&user, PinType::Armoire, "", None)
                .unwrap()
                .path,
            "armoire"
        );
    }

    #[test]
    fn unknown_gear_is_an_error() {
        let err = catalog()
            .item_info(&User::default(), PinType::MarketGear, "nope", None)
            .unwrap_err();
        assert_eq!(
            err,
            PinError::UnknownItem {
                category: PinType::MarketGear,
                key: "nope".into()
            }
        );
    }

    #[test]
    fn messages_fall_back_to_english_then_key() {
        let messages = Messages;
        assert!(messages
            .t("cannotUnpinArmoirPotion", Some("de"))
            .starts_with("Der Heiltrank"));
        assert!(messages
            .t("cannotUnpinArmoirPotion", Some("xx"))
            .starts_with("The Health Potion"));
        assert_eq!(messages.t("noSuchKey", None), "noSuchKey");
    }
}
