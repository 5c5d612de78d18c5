use super::collab::{Messages, PinServices};
use super::error::PinError;
use super::events::*;
use super::model::RequestContext;
use super::toggle::{resolve_pin_path, toggle_pinned_path};
use crate::character::components::{Player, User};
use crate::character::systems::target_entity;
use crate::core::{events::LogEvent, resources::PinConfig};
use crate::data::catalog::ContentCatalog;
use bevy::prelude::*;

/// 处理置顶切换请求
pub fn handle_toggle_pin(
    mut ev_toggle: EventReader<TogglePin>,
    mut ev_toggled: EventWriter<PinToggled>,
    mut ev_rejected: EventWriter<PinRejected>,
    mut ev_log: EventWriter<LogEvent>,
    mut users: Query<&mut User>,
    player_query: Query<Entity, With<Player>>,
    catalog: Res<ContentCatalog>,
    messages: Res<Messages>,
    config: Res<PinConfig>,
) {
    let services = PinServices::new(&catalog, &*messages);

    for ev in ev_toggle.read() {
        let Some(target) = target_entity(ev.entity, &player_query) else {
            continue;
        };
        let Ok(mut user) = users.get_mut(target) else {
            warn!("实体 {target} 没有 User 组件");
            continue;
        };

        let ctx = RequestContext::with_language(
            ev.language
                .clone()
                .unwrap_or_else(|| config.default_language.clone()),
        );

        let result = resolve_pin_path(&user, &ev.request, &ctx, &services).and_then(|path| {
            toggle_pinned_path(&mut user, ev.request.pin_type(), &path, &ctx, &services)
                .map(|pinned| (path, pinned))
        });

        match result {
            Ok((path, pinned)) => {
                // 装备显示名称，其它条目显示地址
                let label = catalog
                    .resolve(&path)
                    .filter(|gear| !gear.text.is_empty())
                    .map_or(path.as_str(), |gear| gear.text.as_str());
                let state = if pinned { "已置顶" } else { "已取消置顶" };
                info!("{label} {state}");
                ev_log.write(LogEvent(format!("{state}: {label}")));
                ev_toggled.write(PinToggled {
                    entity: target,
                    path,
                    pinned,
                });
            }
            Err(err) => reject(target, &err, &mut ev_log, &mut ev_rejected),
        }
    }
}

fn reject(
    entity: Entity,
    err: &PinError,
    ev_log: &mut EventWriter<LogEvent>,
    ev_rejected: &mut EventWriter<PinRejected>,
) {
    warn!("置顶请求被拒绝: {err}");
    let message = match err {
        PinError::InvalidRequest(message) => message.clone(),
        other => other.to_string(),
    };
    ev_log.write(LogEvent(message.clone()));
    ev_rejected.write(PinRejected { entity, message });
}
