#![warn(missing_docs)]
//! Hex grid painter.
//!
//! Lays out a flat- or pointy-topped hex grid with random terrain. Left
//! click re-rolls a cell, right click picks its terrain from a menu, and the
//! side panel resizes the grid and edits the palette. Tab toggles the world
//! inspector; Escape closes an open menu or quits.

#[cfg(feature = "native")]
mod cli;
mod ui;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use hex_painter::{GridParams, HexPainter, Palette};

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum AppState {
    /// Normal painting.
    #[default]
    Painting,
    /// Inspector overlay active (Tab to toggle).
    Debugging,
}

#[cfg(feature = "native")]
fn startup_args() -> (GridParams, Option<u64>) {
    let args = <cli::Args as clap::Parser>::parse();
    (args.params(), args.seed)
}

#[cfg(not(feature = "native"))]
fn startup_args() -> (GridParams, Option<u64>) {
    (GridParams::default(), None)
}

fn main() -> AppExit {
    let (params, seed) = startup_args();
    let palette = Palette::default();
    let painter = match seed {
        Some(seed) => HexPainter::seeded(params, palette, seed),
        None => HexPainter::from_os_rng(params, palette),
    };
    let painter = match painter {
        Ok(painter) => painter,
        Err(err) => {
            eprintln!("hex-painter: {err}");
            return AppExit::from_code(2);
        }
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hex Grid Tool".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<AppState>()
    .init_state::<AppState>()
    .insert_resource(painter)
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(ui::UiPlugin(ui::UiConfig::default()))
    .add_systems(Update, (toggle_inspector, dismiss_or_exit))
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(AppState::Debugging)));

    app.run()
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            AppState::Painting => AppState::Debugging,
            AppState::Debugging => AppState::Painting,
        });
    }
}

fn dismiss_or_exit(
    keys: Res<ButtonInput<KeyCode>>,
    mut painter: ResMut<HexPainter>,
    mut exit: MessageWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) && !painter.dismiss() {
        exit.write(AppExit::Success);
    }
}
