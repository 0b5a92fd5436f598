use alien_siege::entities::{Enemy, Entity};
use alien_siege::formation::Formation;
use alien_siege::settings::Settings;

// Arena 40x20 with 3x2 enemies: columns = (40-6)/6 = 5, rows = (20-6-2)/4 = 3.
fn small_settings() -> Settings {
    Settings::new(40, 20)
}

fn single(x: f32, direction: f32) -> Formation {
    Formation {
        enemies: vec![Enemy { x, y: 5.0, width: 3, height: 2 }],
        direction,
    }
}

// ── Grid layout ───────────────────────────────────────────────────────────────

#[test]
fn populate_fills_the_grid() {
    let mut formation = Formation::new();
    formation.populate(&small_settings());
    assert_eq!(formation.enemies.len(), 15); // 5 columns x 3 rows
}

#[test]
fn populate_positions_follow_the_spacing_rule() {
    let mut formation = Formation::new();
    formation.populate(&small_settings());
    // First enemy sits one width in and one height down
    assert_eq!(formation.enemies[0].x, 3.0);
    assert_eq!(formation.enemies[0].y, 2.0);
    // Columns are two widths apart, rows two heights
    assert_eq!(formation.enemies[1].x, 9.0);
    assert_eq!(formation.enemies[5].y, 6.0); // first enemy of row 1
}

#[test]
fn populate_spawns_disjoint_enemies() {
    let mut formation = Formation::new();
    formation.populate(&small_settings());
    for (i, a) in formation.enemies.iter().enumerate() {
        for b in formation.enemies.iter().skip(i + 1) {
            assert!(!a.bounds().overlaps(&b.bounds()));
        }
    }
}

#[test]
fn populate_replaces_any_previous_grid() {
    let mut formation = Formation::new();
    formation.populate(&small_settings());
    formation.populate(&small_settings());
    assert_eq!(formation.enemies.len(), 15); // not 30
}

#[test]
fn populate_keeps_the_grid_inside_the_arena() {
    let mut formation = Formation::new();
    formation.populate(&small_settings());
    for enemy in &formation.enemies {
        let b = enemy.bounds();
        assert!(b.left >= 0 && b.right() <= 40);
        assert!(b.top >= 0 && b.bottom() <= 20);
    }
}

// ── March ─────────────────────────────────────────────────────────────────────

#[test]
fn advance_marches_right() {
    let mut formation = single(10.0, 1.0);
    formation.advance(40, 0.5, 1.0);
    assert_eq!(formation.enemies[0].x, 10.5);
    assert_eq!(formation.enemies[0].y, 5.0); // no drop away from the edge
}

#[test]
fn advance_marches_left() {
    let mut formation = single(10.0, -1.0);
    formation.advance(40, 0.5, 1.0);
    assert_eq!(formation.enemies[0].x, 9.5);
}

#[test]
fn edge_contact_drops_and_reverses() {
    // right() = 37 + 3 = 40 touches the right edge
    let mut formation = single(37.0, 1.0);
    formation.advance(40, 0.5, 1.0);
    assert_eq!(formation.enemies[0].y, 6.0);
    assert_eq!(formation.enemies[0].x, 37.0); // the drop frame has no sideways motion
    assert_eq!(formation.direction, -1.0);
}

#[test]
fn reversal_does_not_cascade() {
    // The frame after a drop must march away, not drop again
    let mut formation = single(37.0, 1.0);
    formation.advance(40, 0.5, 1.0); // drop + reverse
    formation.advance(40, 0.5, 1.0); // still beside the right edge, now moving left
    assert_eq!(formation.enemies[0].y, 6.0); // exactly one drop
    assert_eq!(formation.enemies[0].x, 36.5);
}

#[test]
fn left_edge_is_symmetric() {
    let mut formation = single(0.0, -1.0);
    formation.advance(40, 0.5, 1.0);
    assert_eq!(formation.enemies[0].y, 6.0);
    assert_eq!(formation.direction, 1.0);
    formation.advance(40, 0.5, 1.0);
    assert_eq!(formation.enemies[0].x, 0.5);
    assert_eq!(formation.enemies[0].y, 6.0);
}

#[test]
fn trailing_edge_contact_is_ignored() {
    // Touching the left edge while marching right is not an edge condition
    let mut formation = single(0.0, 1.0);
    formation.advance(40, 0.5, 1.0);
    assert_eq!(formation.enemies[0].y, 5.0);
    assert_eq!(formation.enemies[0].x, 0.5);
}

#[test]
fn one_member_at_the_edge_drops_everyone() {
    let mut formation = Formation {
        enemies: vec![
            Enemy { x: 37.0, y: 5.0, width: 3, height: 2 },
            Enemy { x: 10.0, y: 9.0, width: 3, height: 2 },
        ],
        direction: 1.0,
    };
    formation.advance(40, 0.5, 1.0);
    assert_eq!(formation.enemies[0].y, 6.0);
    assert_eq!(formation.enemies[1].y, 10.0);
    assert_eq!(formation.enemies[1].x, 10.0); // drop frame, nobody moves sideways
}

#[test]
fn empty_formation_is_harmless() {
    let mut formation = Formation::new();
    assert!(formation.is_empty());
    formation.advance(40, 0.5, 1.0); // nothing to move, nothing to check
    assert_eq!(formation.direction, 1.0);
}
