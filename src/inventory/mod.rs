pub mod events;
mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use events::*;
use systems::*;

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BuyGear>().add_systems(
            Update,
            buy_gear.run_if(in_state(AppState::InGame)),
        );
    }
}
