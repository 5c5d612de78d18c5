use super::{components::*, events::*};
use crate::core::{events::LogEvent, resources::PinConfig};
use crate::data::catalog::ContentCatalog;
use crate::pins::collab::{Messages, PinServices};
use crate::pins::sync::change_class;
use crate::pins::toggle::effective_pinned_items;
use bevy::prelude::*;

/// PLACEHOLDER 指向玩家实体
pub fn target_entity(entity: Entity, player_query: &Query<Entity, With<Player>>) -> Option<Entity> {
    if entity == Entity::PLACEHOLDER {
        player_query.single().ok()
    } else {
        Some(entity)
    }
}

/// 切换职业：移除旧职业候选 → 设置职业 → 加入新职业候选
pub fn handle_select_class(
    mut ev_select: EventReader<SelectClass>,
    mut ev_log: EventWriter<LogEvent>,
    mut users: Query<&mut User>,
    player_query: Query<Entity, With<Player>>,
    catalog: Res<ContentCatalog>,
    messages: Res<Messages>,
) {
    let services = PinServices::new(&catalog, &*messages);

    for ev in ev_select.read() {
        let Some(target) = target_entity(ev.entity, &player_query) else {
            continue;
        };
        let Ok(mut user) = users.get_mut(target) else {
            warn!("实体 {target} 没有 User 组件");
            continue;
        };

        match change_class(&mut user, ev.class, &services) {
            Ok(()) => {
                info!("职业切换为 {:?}", ev.class);
                ev_log.write(LogEvent(format!(
                    "职业：{:?}，置顶 {} 项",
                    ev.class,
                    user.pinned_items.len()
                )));
            }
            Err(err) => warn!("切换职业失败: {err}"),
        }
    }
}

/// 显示实际置顶列表
pub fn show_pins(
    mut ev_show: EventReader<ShowPins>,
    mut ev_log: EventWriter<LogEvent>,
    users: Query<&User>,
    player_query: Query<Entity, With<Player>>,
    catalog: Res<ContentCatalog>,
) {
    for ev in ev_show.read() {
        let entity = ev.entity.unwrap_or(Entity::PLACEHOLDER);
        let Some(user) = target_entity(entity, &player_query).and_then(|e| users.get(e).ok())
        else {
            ev_log.write(LogEvent("未找到用户".to_string()));
            continue;
        };

        let pins = effective_pinned_items(user, &*catalog);
        if pins.is_empty() {
            ev_log.write(LogEvent("  (no pins)".to_string()));
        }
        for (idx, pin) in pins.iter().enumerate() {
            ev_log.write(LogEvent(format!("[{idx}] {:?} {}", pin.pin_type, pin.path)));
        }
    }
}

/// 按配置替玩家选择初始职业
pub fn select_starting_class(config: Res<PinConfig>, mut ev_select: EventWriter<SelectClass>) {
    if let Some(class) = config.starting_class {
        ev_select.write(SelectClass {
            entity: Entity::PLACEHOLDER,
            class,
        });
    }
}

/// 初始化玩家实体（未选职业）
pub fn spawn_player(mut commands: Commands) {
    commands.spawn((Player, User::default()));
}
