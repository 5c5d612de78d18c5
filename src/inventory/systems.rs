use super::events::*;
use crate::character::components::{Player, User};
use crate::character::systems::target_entity;
use crate::core::events::LogEvent;
use crate::data::catalog::ContentCatalog;
use crate::pins::collab::{Messages, PinServices};
use crate::pins::model::PinType;
use crate::pins::sync::remove_pinned_gear_add_possible_new_ones;
use bevy::prelude::*;

/// 处理购买：标记拥有并刷新按职业置顶的候选
pub fn buy_gear(
    mut ev_buy: EventReader<BuyGear>,
    mut ev_log: EventWriter<LogEvent>,
    mut users: Query<&mut User>,
    player_query: Query<Entity, With<Player>>,
    catalog: Res<ContentCatalog>,
    messages: Res<Messages>,
) {
    let services = PinServices::new(&catalog, &*messages);

    for ev in ev_buy.read() {
        let Some(target) = target_entity(ev.entity, &player_query) else {
            continue;
        };
        let Ok(mut user) = users.get_mut(target) else {
            warn!("购买 {} 时未找到用户", ev.key);
            continue;
        };

        let info = match services
            .resolver
            .item_info(&user, PinType::MarketGear, &ev.key, None)
        {
            Ok(info) => info,
            Err(err) => {
                warn!("不存在装备 {}: {err}", ev.key);
                continue;
            }
        };

        if user.owns(&ev.key) {
            ev_log.write(LogEvent(format!("已拥有 {}", ev.key)));
            continue;
        }

        match remove_pinned_gear_add_possible_new_ones(&mut user, &services, &info.path, &ev.key) {
            Ok(()) => {
                info!("获得 {}", ev.key);
                ev_log.write(LogEvent(format!("获得 {}", ev.key)));
            }
            Err(err) => warn!("刷新置顶失败: {err}"),
        }
    }
}
