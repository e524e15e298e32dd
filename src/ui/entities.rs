use bevy::prelude::*;

/// Marker for the 2D camera egui renders through.
#[derive(Component, Reflect)]
pub struct PainterCamera;

/// Screen position of the open terrain menu's top-left corner.
#[derive(Resource, Default)]
pub struct MenuAnchor(pub Vec2);

/// Color being edited in the picker, committed only on confirm.
#[derive(Resource, Default)]
pub struct ColorDraft(pub Option<[u8; 3]>);
