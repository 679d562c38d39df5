//! Tests for the shared vocabulary: serde round-trips and snapshot queries.

use std::collections::BTreeMap;

use crate::config::TacticsConfig;
use crate::constants::*;
use crate::entity::{Planet, Ship};
use crate::enums::*;
use crate::moves::Move;
use crate::state::{Player, WorldState};
use crate::types::Position;

fn ship(id: i32, owner: i32, x: f64, y: f64, status: DockingStatus) -> Ship {
    Ship {
        id,
        owner,
        position: Position::new(x, y),
        health: SHIP_MAX_HEALTH,
        radius: SHIP_RADIUS,
        docking_status: status,
        docked_planet: None,
        docking_progress: 0,
        weapon_cooldown: 0,
    }
}

fn two_player_world() -> WorldState {
    let mut mine = BTreeMap::new();
    mine.insert(0, ship(0, 0, 10.0, 10.0, DockingStatus::Undocked));
    mine.insert(2, ship(2, 0, 12.0, 10.0, DockingStatus::Docked));
    let mut theirs = BTreeMap::new();
    theirs.insert(1, ship(1, 1, 90.0, 90.0, DockingStatus::Undocked));

    let mut planets = BTreeMap::new();
    planets.insert(
        100,
        Planet {
            id: 100,
            owner: None,
            position: Position::new(50.0, 50.0),
            health: 1500.0,
            radius: 6.0,
            docking_spots: 3,
            docked_ships: vec![],
        },
    );

    WorldState {
        turn: 1,
        width: 240.0,
        height: 160.0,
        players: vec![
            Player { id: 0, ships: mine },
            Player { id: 1, ships: theirs },
        ],
        planets,
    }
}

// ---- Serde round-trips ----

#[test]
fn test_docking_status_serde() {
    let variants = vec![
        DockingStatus::Undocked,
        DockingStatus::Docking,
        DockingStatus::Docked,
        DockingStatus::Undocking,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: DockingStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_order_kind_serde() {
    let variants = vec![
        OrderKind::Colonize,
        OrderKind::Attack,
        OrderKind::Defend,
        OrderKind::CrashInto,
        OrderKind::Group,
        OrderKind::Rush,
        OrderKind::AntiRush,
        OrderKind::Assassination,
        OrderKind::Lure,
        OrderKind::Reinforce,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: OrderKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_combat_event_serde() {
    let variants = vec![
        CombatEvent::Attack,
        CombatEvent::AttackDocked,
        CombatEvent::Defend,
        CombatEvent::Group,
        CombatEvent::Retreat,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_move_serde() {
    let variants = vec![
        Move::Noop,
        Move::Thrust {
            angle_deg: 270,
            thrust: 7,
            priority: 300,
        },
        Move::Dock { planet_id: 4 },
        Move::Undock,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_config_serde_round_trip() {
    let config = TacticsConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: TacticsConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}

#[test]
fn test_world_state_serde_round_trip() {
    let world = two_player_world();
    let json = serde_json::to_string(&world).unwrap();
    let back: WorldState = serde_json::from_str(&json).unwrap();
    assert_eq!(world, back);
}

// ---- Snapshot queries ----

#[test]
fn test_ships_of_partitions_by_owner() {
    let world = two_player_world();
    let mine: Vec<i32> = world.ships_of(0).iter().map(|s| s.id).collect();
    let enemies: Vec<i32> = world.enemy_ships_of(0).iter().map(|s| s.id).collect();
    assert_eq!(mine, vec![0, 2]);
    assert_eq!(enemies, vec![1]);
    assert_eq!(world.all_ships().len(), 3);
}

#[test]
fn test_mobile_ships_excludes_docked() {
    let world = two_player_world();
    let mobile: Vec<i32> = world.mobile_ships_of(0).iter().map(|s| s.id).collect();
    assert_eq!(mobile, vec![0]);
}

#[test]
fn test_lookup_by_id() {
    let world = two_player_world();
    assert_eq!(world.ship(2).unwrap().owner, 0);
    assert!(world.ship(99).is_none());
    assert_eq!(world.planet(100).unwrap().docking_spots, 3);
    assert!(world.planet(0).is_none());
}

#[test]
fn test_default_config_matches_constants() {
    let config = TacticsConfig::default();
    assert_eq!(config.engagement_radius, ENGAGEMENT_RADIUS);
    assert_eq!(config.max_navigation_corrections, MAX_NAVIGATION_CORRECTIONS);
    assert_eq!(config.combat_search_depth, COMBAT_SEARCH_DEPTH);
}
