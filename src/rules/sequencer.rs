//! Turn order.
//!
//! Teams take turns in seating order, one member at a time, so teams of
//! unequal size still alternate fairly: sizes [2, 2, 1] play
//! `T1P1, T2P1, T3P1, T1P2, T2P2`.

use crate::core::{Game, PlayerId};
use crate::tableau::Team;

/// Full rotation of players across teams.
#[must_use]
pub fn player_order(teams: &[Team]) -> Vec<PlayerId> {
    let widest = teams.iter().map(Team::size).max().unwrap_or(0);

    (0..widest)
        .flat_map(|seat| teams.iter().filter_map(move |team| team.players.get(seat).copied()))
        .collect()
}

/// Player who moves after the current one.
///
/// Recomputed from team composition on every call.
#[must_use]
pub fn next_player(game: &Game) -> PlayerId {
    let order = player_order(&game.teams);
    let current = game.current_player();

    match order.iter().position(|&p| p == current) {
        Some(idx) => order[(idx + 1) % order.len()],
        None => order.first().copied().unwrap_or(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TeamId;

    fn teams(sizes: &[usize]) -> Vec<Team> {
        let mut next = 0u8;
        let mut out = Vec::new();
        for (i, &size) in sizes.iter().enumerate() {
            let players: Vec<_> = (next..next + size as u8).map(PlayerId::new).collect();
            next += size as u8;
            out.push(Team::new(TeamId::new(i as u8), players, ""));
        }
        out
    }

    #[test]
    fn test_uneven_teams_interleave() {
        // T1 = {0, 1}, T2 = {2, 3}, T3 = {4}
        let order = player_order(&teams(&[2, 2, 1]));
        let ids: Vec<u8> = order.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![0, 2, 4, 1, 3]);
    }

    #[test]
    fn test_single_short_team_first() {
        let order = player_order(&teams(&[1, 3]));
        let ids: Vec<u8> = order.iter().map(|p| p.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_teams() {
        assert!(player_order(&[]).is_empty());
    }
}
