use bevy::prelude::*;

/// 购买/获得一件装备
#[derive(Event, Debug, Clone)]
pub struct BuyGear {
    pub entity: Entity, // PLACEHOLDER 表示玩家
    pub key: String,
}
