pub mod components;
pub mod events;
pub mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use events::*;
use systems::*;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<SelectClass>()
            .add_event::<ShowPins>()
            // 进入游戏时生成玩家，并按配置选择初始职业
            .add_systems(
                OnEnter(AppState::InGame),
                (spawn_player, select_starting_class),
            )
            .add_systems(
                Update,
                (handle_select_class, show_pins)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
