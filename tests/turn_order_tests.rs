//! Turn order tests.
//!
//! These tests verify the rotation across teams of uneven size and that every
//! play hands the turn to the next player in that rotation.

use mille_bornes::cards::{Card, Distance};
use mille_bornes::core::{Game, GameBuilder, PlayerId};
use mille_bornes::rules::{apply, next_player, player_order};

/// Build a round with the given team sizes. Player ids are assigned team by
/// team, so sizes [2, 2, 1] give T1 = {0, 1}, T2 = {2, 3}, T3 = {4}.
fn table(sizes: &[usize]) -> Game {
    let colors = ["blue", "red", "green", "yellow", "white", "black"];
    let mut builder = GameBuilder::new().hand_size(0);
    for (i, &size) in sizes.iter().enumerate() {
        let names: Vec<String> = (0..size).map(|p| format!("T{}P{}", i + 1, p + 1)).collect();
        builder = builder.team(colors[i % colors.len()], names);
    }
    builder
        .deck(vec![Card::Distance(Distance::D25); 40])
        .unshuffled()
        .build(0)
        .unwrap()
}

fn ids(order: &[PlayerId]) -> Vec<u8> {
    order.iter().map(|p| p.0).collect()
}

// =============================================================================
// Rotation
// =============================================================================

/// Sizes [2, 2, 1] play T1P1, T2P1, T3P1, T1P2, T2P2.
#[test]
fn test_uneven_rotation() {
    let game = table(&[2, 2, 1]);
    assert_eq!(ids(&player_order(&game.teams)), vec![0, 2, 4, 1, 3]);
}

/// A full cycle visits every player exactly once, then repeats.
#[test]
fn test_cycle_visits_everyone_once() {
    let mut game = table(&[2, 2, 1]);
    let start = game.current_player();
    let mut seen = Vec::new();

    for _ in 0..5 {
        seen.push(game.current_player().0);
        let card = game.current_hand()[0];
        apply(&mut game, card, None).unwrap();
    }

    assert_eq!(seen, vec![0, 2, 4, 1, 3]);
    assert_eq!(game.current_player(), start);
}

#[test]
fn test_two_teams_of_two_alternate() {
    let game = table(&[2, 2]);
    assert_eq!(ids(&player_order(&game.teams)), vec![0, 2, 1, 3]);
}

#[test]
fn test_next_player_wraps() {
    let mut game = table(&[1, 1, 1]);
    assert_eq!(next_player(&game), PlayerId::new(1));

    for _ in 0..2 {
        let card = game.current_hand()[0];
        apply(&mut game, card, None).unwrap();
    }
    assert_eq!(game.current_player(), PlayerId::new(2));
    assert_eq!(next_player(&game), PlayerId::new(0));
}

/// With a single player the turn comes straight back.
#[test]
fn test_single_player_repeats() {
    let mut game = table(&[1]);
    assert_eq!(next_player(&game), PlayerId::new(0));

    let card = game.current_hand()[0];
    apply(&mut game, card, None).unwrap();

    assert_eq!(game.current_player(), PlayerId::new(0));
    // Played one, drew one.
    assert_eq!(game.current_hand().len(), 1);
}

/// The rotation depends only on team composition, not on turn history.
#[test]
fn test_rotation_is_stateless() {
    let mut game = table(&[3, 1]);
    let before = player_order(&game.teams);

    for _ in 0..7 {
        let card = game.current_hand()[0];
        apply(&mut game, card, None).unwrap();
    }

    assert_eq!(player_order(&game.teams), before);
    assert_eq!(ids(&before), vec![0, 3, 1, 2]);
}
