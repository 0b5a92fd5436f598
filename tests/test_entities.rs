use alien_siege::entities::*;
use alien_siege::events::Steer;

// ── Bounds ────────────────────────────────────────────────────────────────────

#[test]
fn bounds_overlap_basic() {
    let a = Bounds { left: 0, top: 0, width: 3, height: 2 };
    let b = Bounds { left: 2, top: 1, width: 3, height: 2 };
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn bounds_touching_edges_do_not_overlap() {
    // Half-open edges: side-by-side and stacked boxes only touch
    let a = Bounds { left: 0, top: 0, width: 3, height: 2 };
    let beside = Bounds { left: 3, top: 0, width: 3, height: 2 };
    let below = Bounds { left: 0, top: 2, width: 3, height: 2 };
    assert!(!a.overlaps(&beside));
    assert!(!a.overlaps(&below));
}

#[test]
fn bounds_disjoint_do_not_overlap() {
    let a = Bounds { left: 0, top: 0, width: 3, height: 2 };
    let b = Bounds { left: 10, top: 10, width: 3, height: 2 };
    assert!(!a.overlaps(&b));
}

#[test]
fn bounds_contains_is_half_open() {
    let b = Bounds { left: 2, top: 3, width: 3, height: 2 };
    assert!(b.contains(2, 3)); // top-left corner inside
    assert!(b.contains(4, 4));
    assert!(!b.contains(5, 3)); // right edge excluded
    assert!(!b.contains(2, 5)); // bottom edge excluded
}

#[test]
fn bounds_derived_by_truncation() {
    // Fractional positions land in the cell they have fully entered
    let p = Projectile { x: 5.9, y: 7.2, width: 1, height: 1 };
    assert_eq!(p.bounds(), Bounds { left: 5, top: 7, width: 1, height: 1 });
}

// ── Ship ──────────────────────────────────────────────────────────────────────

fn make_ship() -> Ship {
    Ship::new(40, 20, 3, 2)
}

#[test]
fn ship_spawns_bottom_center() {
    let ship = make_ship();
    assert_eq!(ship.x, 18.0); // (40 - 3) / 2
    assert_eq!(ship.y, 18.0); // 20 - 2
    assert!(!ship.shield_active());
}

#[test]
fn ship_moves_right_while_flag_held() {
    let mut ship = make_ship();
    ship.set_moving(Steer::Right, true);
    ship.update(0, 40, 1.5);
    assert_eq!(ship.x, 19.5);
}

#[test]
fn ship_moves_left_while_flag_held() {
    let mut ship = make_ship();
    ship.set_moving(Steer::Left, true);
    ship.update(0, 40, 1.5);
    assert_eq!(ship.x, 16.5);
}

#[test]
fn ship_opposed_flags_cancel_out() {
    let mut ship = make_ship();
    ship.set_moving(Steer::Left, true);
    ship.set_moving(Steer::Right, true);
    ship.update(0, 40, 1.5);
    assert_eq!(ship.x, 18.0);
}

#[test]
fn ship_releasing_flag_stops_motion() {
    let mut ship = make_ship();
    ship.set_moving(Steer::Right, true);
    ship.update(0, 40, 1.5);
    ship.set_moving(Steer::Right, false);
    ship.update(0, 40, 1.5);
    assert_eq!(ship.x, 19.5); // only the first update moved
}

#[test]
fn ship_never_exits_right_edge() {
    // However long the key is held, the box stays inside the arena
    let mut ship = make_ship();
    ship.set_moving(Steer::Right, true);
    for _ in 0..100 {
        ship.update(0, 40, 1.5);
        assert!(ship.bounds().right() <= 40);
    }
    assert_eq!(ship.x, 37.0); // parked flush against the edge
}

#[test]
fn ship_never_exits_left_edge() {
    let mut ship = make_ship();
    ship.set_moving(Steer::Left, true);
    for _ in 0..100 {
        ship.update(0, 40, 1.5);
        assert!(ship.bounds().left >= 0);
    }
    assert_eq!(ship.x, 0.0);
}

#[test]
fn ship_wider_than_the_arena_pins_to_the_left_edge() {
    // Degenerate geometry from the public constructors must not panic the
    // clamp; the ship just sits at column 0
    let mut ship = Ship::new(2, 20, 3, 2);
    ship.set_moving(Steer::Right, true);
    ship.update(0, 2, 1.5);
    assert_eq!(ship.x, 0.0);
    ship.set_moving(Steer::Right, false);
    ship.set_moving(Steer::Left, true);
    ship.update(0, 2, 1.5);
    assert_eq!(ship.x, 0.0);
}

#[test]
fn ship_center_repositions() {
    let mut ship = make_ship();
    ship.set_moving(Steer::Right, true);
    for _ in 0..30 {
        ship.update(0, 40, 1.5);
    }
    ship.center(40, 20);
    assert_eq!(ship.x, 18.0);
    assert_eq!(ship.y, 18.0);
}

// ── Shield timing ─────────────────────────────────────────────────────────────

#[test]
fn shield_lasts_until_the_final_millisecond() {
    let mut ship = make_ship();
    ship.activate_shield(1_000, 10_000);
    ship.update(10_999, 40, 1.0);
    assert!(ship.shield_active());
}

#[test]
fn shield_expires_at_exact_deadline() {
    let mut ship = make_ship();
    ship.activate_shield(1_000, 10_000);
    ship.update(11_000, 40, 1.0);
    assert!(!ship.shield_active());
}

#[test]
fn shield_reactivation_restarts_the_clock() {
    let mut ship = make_ship();
    ship.activate_shield(0, 10_000);
    ship.activate_shield(5_000, 10_000); // picked up a second one
    ship.update(14_999, 40, 1.0);
    assert!(ship.shield_active());
    ship.update(15_000, 40, 1.0);
    assert!(!ship.shield_active());
}

// ── Projectile & power-up motion ──────────────────────────────────────────────

#[test]
fn projectile_rises() {
    let mut p = Projectile { x: 5.0, y: 10.0, width: 1, height: 1 };
    p.update(1.0);
    assert_eq!(p.y, 9.0);
}

#[test]
fn powerup_falls() {
    let mut p = PowerUp { x: 5.0, y: 0.0, width: 1, height: 1, kind: PowerUpKind::Life };
    p.update(0.2);
    assert_eq!(p.y, 0.2);
    assert_eq!(p.bounds().top, 0); // still in the top cell
}
