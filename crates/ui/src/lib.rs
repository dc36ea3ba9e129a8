use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod estimate_panel;
pub mod formatting;
mod graphs;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_poster_theme)
            .add_plugins(estimate_panel::EstimatePanelPlugin);
    }
}
