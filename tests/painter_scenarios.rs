//! End-to-end painting sessions driven through the public controller API.

use bevy::math::IVec2;
use hex_painter::{
    ButtonId, GridError, GridParams, HexPainter, InteractionMode, Orientation, PainterEvent,
    Palette, PointerButton, SliderKey,
};

fn painter(cols: u32, rows: u32, orientation: Orientation) -> HexPainter {
    let params = GridParams {
        cols,
        rows,
        size: 40,
        border: 4,
        orientation,
    };
    HexPainter::seeded(params, Palette::default(), 7).unwrap()
}

fn center(p: &HexPainter, col: u32, row: u32) -> IVec2 {
    p.grid().cell(col, row).unwrap().center().as_ivec2()
}

fn terrain(p: &HexPainter, col: u32, row: u32) -> usize {
    p.grid().cell(col, row).unwrap().terrain()
}

fn assert_terrain_in_range(p: &HexPainter) {
    let len = p.palette().len();
    for cell in p.grid().cells() {
        assert!(cell.terrain() < len, "{:?} holds {}", cell.coords(), cell.terrain());
    }
}

// ── Painting ───────────────────────────────────────────────────────

#[test]
fn menu_pick_survives_growing_the_grid() {
    let mut p = painter(3, 2, Orientation::Flat);

    p.click(center(&p, 1, 1), PointerButton::Secondary);
    assert_eq!(p.mode(), InteractionMode::MenuOpen { col: 1, row: 1 });
    let events = p.choose_terrain(2).unwrap();
    assert_eq!(
        events,
        vec![PainterEvent::TerrainChanged {
            col: 1,
            row: 1,
            terrain: 2
        }]
    );
    assert!(p.mode().is_idle());

    let events = p.set_slider(SliderKey::Cols, 4).unwrap();
    assert!(matches!(events.as_slice(), [PainterEvent::ParametersChanged(params)] if params.cols == 4));
    assert_eq!((p.grid().cols(), p.grid().rows()), (4, 2));
    assert_eq!(p.grid().len(), 8);
    assert_eq!(terrain(&p, 1, 1), 2);
    assert!(p.grid().cell(3, 0).is_some());
    assert!(p.grid().cell(3, 1).is_some());
    assert_terrain_in_range(&p);
}

#[test]
fn left_click_rerolls_and_selects() {
    let mut p = painter(4, 4, Orientation::Pointy);
    let events = p.click(center(&p, 2, 3), PointerButton::Primary);
    assert_eq!(
        events.first(),
        Some(&PainterEvent::CellClicked {
            col: 2,
            row: 3,
            button: PointerButton::Primary
        })
    );
    assert!(matches!(
        events.get(1),
        Some(PainterEvent::TerrainChanged { col: 2, row: 3, .. })
    ));
    assert_eq!(p.grid().selected(), Some((2, 3)));

    let highlighted: Vec<_> = p
        .shapes()
        .into_iter()
        .filter(|s| s.highlight.is_some())
        .map(|s| s.coords)
        .collect();
    assert_eq!(highlighted, vec![(2, 3)]);
}

#[test]
fn clicks_outside_the_grid_do_nothing() {
    let mut p = painter(2, 2, Orientation::Flat);
    let before = p.grid().clone();
    assert!(p.click(IVec2::new(4000, 4000), PointerButton::Primary).is_empty());
    assert!(p.click(IVec2::new(4000, 4000), PointerButton::Secondary).is_empty());
    assert_eq!(p.grid(), &before);
    assert!(p.mode().is_idle());
}

#[test]
fn every_center_of_a_five_by_five_grid_hits_its_cell() {
    for orientation in Orientation::ALL {
        let mut p = painter(5, 5, orientation);
        for col in 0..5 {
            for row in 0..5 {
                let events = p.click(center(&p, col, row), PointerButton::Secondary);
                assert_eq!(
                    events,
                    vec![PainterEvent::CellClicked {
                        col,
                        row,
                        button: PointerButton::Secondary
                    }]
                );
                assert!(p.dismiss());
            }
        }
    }
}

#[test]
fn flipping_orientation_moves_the_hit_area() {
    let mut p = painter(3, 2, Orientation::Flat);
    let corner = IVec2::new(32, 17);
    assert_eq!(p.click(corner, PointerButton::Secondary).len(), 1);
    assert!(p.dismiss());

    p.set_orientation(Orientation::Pointy).unwrap();
    assert!(p.click(corner, PointerButton::Secondary).is_empty());
    let origin = center(&p, 0, 0);
    assert_eq!(p.click(origin, PointerButton::Secondary).len(), 1);
}

// ── Modes ──────────────────────────────────────────────────────────

#[test]
fn only_one_modal_at_a_time() {
    let mut p = painter(3, 3, Orientation::Flat);
    p.press(ButtonId::TerrainColor(1)).unwrap();
    assert_eq!(p.mode(), InteractionMode::ColorPickerOpen { terrain: 1 });

    let before = p.grid().clone();
    assert!(p.click(center(&p, 0, 0), PointerButton::Secondary).is_empty());
    assert!(p.click(center(&p, 0, 0), PointerButton::Primary).is_empty());
    assert_eq!(p.grid(), &before);
    assert_eq!(p.mode(), InteractionMode::ColorPickerOpen { terrain: 1 });

    let events = p.pick_color([1, 2, 3]).unwrap();
    assert_eq!(
        events,
        vec![PainterEvent::PaletteColorChanged {
            terrain: 1,
            color: [1, 2, 3]
        }]
    );
    assert_eq!(p.palette().color(1), Ok([1, 2, 3]));
    assert!(p.mode().is_idle());
}

#[test]
fn shrinking_away_the_menu_cell_closes_the_menu() {
    let mut p = painter(4, 4, Orientation::Flat);
    p.click(center(&p, 3, 3), PointerButton::Secondary);
    assert!(p.mode().menu_cell().is_some());

    p.set_slider(SliderKey::Rows, 2).unwrap();
    assert!(p.mode().is_idle());
    assert_eq!(p.grid().rows(), 2);
}

// ── Palette ────────────────────────────────────────────────────────

#[test]
fn palette_edits_never_leave_dangling_terrain() {
    let mut p = painter(6, 6, Orientation::Flat);
    p.press(ButtonId::AddTerrain).unwrap();
    assert_eq!(p.palette().len(), 8);
    assert_eq!(p.palette().get(7).map(|t| t.name.as_str()), Some("Terrain 8"));

    for _ in 0..7 {
        let events = p.press(ButtonId::RemoveTerrain(0)).unwrap();
        assert_eq!(
            events,
            vec![PainterEvent::PaletteChanged {
                len: p.palette().len()
            }]
        );
        assert_terrain_in_range(&p);
    }
    assert_eq!(p.palette().len(), 1);
    assert!(p.grid().cells().iter().all(|c| c.terrain() == 0));

    assert_eq!(
        p.press(ButtonId::RemoveTerrain(0)),
        Err(GridError::LastTerrain)
    );
}

#[test]
fn invalid_slider_values_keep_the_current_grid() {
    let mut p = painter(3, 3, Orientation::Flat);
    let before = p.grid().clone();
    assert!(p.set_slider(SliderKey::Cols, 0).is_err());
    assert_eq!(p.grid(), &before);
    assert!(p.set_slider(SliderKey::Cols, 3).unwrap().is_empty());
}

#[test]
fn same_seed_paints_the_same_grid() {
    let a = painter(8, 8, Orientation::Pointy);
    let b = painter(8, 8, Orientation::Pointy);
    assert_eq!(a.grid(), b.grid());
}
