use serde::{Deserialize, Serialize};

/// 置顶条目的展示类别，只作描述，不参与身份比较
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinType {
    #[serde(rename = "marketGear")]
    MarketGear,
    #[serde(rename = "armoire")]
    Armoire,
    #[serde(rename = "potion")]
    Potion,
    #[serde(rename = "quests")]
    Quests,
    #[serde(rename = "eggs")]
    Eggs,
    #[serde(rename = "hatchingPotions")]
    HatchingPotions,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "background")]
    Background,
    #[serde(rename = "mystery_set")]
    MysterySet,
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "gems")]
    Gems,
}

/// `{type, path}`；相等性只看 path
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct PinReference {
    #[serde(rename = "type")]
    pub pin_type: PinType,
    pub path: String,
}

impl PinReference {
    pub fn new(pin_type: PinType, path: impl Into<String>) -> Self {
        Self {
            pin_type,
            path: path.into(),
        }
    }
}

impl PartialEq for PinReference {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

/// 用户发起的置顶请求：要么已知 path，要么只给出内容 key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinRequest {
    ByPath { path: String, pin_type: PinType },
    ByItem { item_key: String, pin_type: PinType },
}

impl PinRequest {
    pub fn pin_type(&self) -> PinType {
        match self {
            PinRequest::ByPath { pin_type, .. } | PinRequest::ByItem { pin_type, .. } => {
                *pin_type
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub language: Option<String>,
}

impl RequestContext {
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }
}

/// 解析器返回的条目信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    pub key: String,
    pub path: String,
    pub pin_type: PinType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_path_only() {
        let a = PinReference::new(PinType::MarketGear, "gear.flat.sword");
        let b = PinReference::new(PinType::Quests, "gear.flat.sword");
        assert_eq!(a, b);
        assert_ne!(a, PinReference::new(PinType::MarketGear, "gear.flat.shield"));
    }

    #[test]
    fn serializes_with_type_field() {
        let pin = PinReference::new(PinType::HatchingPotions, "hatchingPotions.Golden");
        let json = serde_json::to_value(&pin).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "hatchingPotions", "path": "hatchingPotions.Golden"})
        );
    }
}
