//! Zone movement over the player card sequences.

use tracing::warn;

use crate::cards::InstanceId;
use crate::core::GameState;

use super::Zone;

/// Result of a zone move.
///
/// A miss is deliberately not an error: the reference behavior treats a
/// move of an absent card as a no-op. It is surfaced as a distinct value
/// (and logged) instead of being swallowed, so callers that do care can
/// tell the difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum ZoneMove {
    /// The card was found in the source zone and moved.
    Moved,
    /// The card was not in the stated source zone; nothing changed.
    NotFound,
}

/// Move a card between two zones of whichever player holds it.
///
/// The owning player is found by a linear scan of both seats in index
/// order; with exactly two players an index would buy nothing and the scan
/// order is part of the deterministic contract. The card is removed from
/// the source sequence and appended to the destination sequence, keeping
/// ownership transfer atomic.
pub fn move_zone(
    state: &mut GameState,
    instance_id: InstanceId,
    from: Zone,
    to: Zone,
) -> ZoneMove {
    for seat in 0..state.players.len() {
        let player = &mut state.players[seat];
        if let Some(card) = player.take_from(from, instance_id) {
            player.zone_mut(to).push_back(card);
            return ZoneMove::Moved;
        }
    }

    warn!(card = %instance_id, %from, %to, "zone move target not found; skipping");
    ZoneMove::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardInstance, CardKey, CardPrototype, CardStats, CreatureType, Faction};
    use crate::core::PlayerId;

    fn put_in_play(state: &mut GameState, owner: PlayerId) -> InstanceId {
        let proto = CardPrototype::new(
            CardKey::standard(1),
            "Unit",
            CardStats {
                defense: 3,
                damage: 2,
                cost: 1,
                faction: Faction::Earth,
                creature_type: CreatureType::Light,
            },
        );
        let id = state.alloc_instance_id();
        let card = CardInstance::from_prototype(id, &proto, owner);
        state.player_mut(owner).play.push_back(card);
        id
    }

    #[test]
    fn test_move_play_to_graveyard() {
        let mut state = GameState::new(42);
        let id = put_in_play(&mut state, PlayerId::new(1));

        let moved = move_zone(&mut state, id, Zone::Play, Zone::Graveyard);

        assert_eq!(moved, ZoneMove::Moved);
        assert!(state.player(PlayerId::new(1)).play.is_empty());
        assert_eq!(state.player(PlayerId::new(1)).graveyard.len(), 1);
        assert_eq!(
            state.locate(id),
            Some((PlayerId::new(1), Zone::Graveyard))
        );
    }

    #[test]
    fn test_move_missing_card_is_noop() {
        let mut state = GameState::new(42);
        let id = put_in_play(&mut state, PlayerId::new(0));

        // Wrong source zone: the card is in Play, not Hand.
        let moved = move_zone(&mut state, id, Zone::Hand, Zone::Graveyard);

        assert_eq!(moved, ZoneMove::NotFound);
        assert_eq!(state.locate(id), Some((PlayerId::new(0), Zone::Play)));

        let moved = move_zone(&mut state, InstanceId(99), Zone::Play, Zone::Graveyard);
        assert_eq!(moved, ZoneMove::NotFound);
    }

    #[test]
    fn test_move_scans_seats_in_order() {
        let mut state = GameState::new(42);
        let id0 = put_in_play(&mut state, PlayerId::new(0));
        let id1 = put_in_play(&mut state, PlayerId::new(1));

        assert_eq!(
            move_zone(&mut state, id1, Zone::Play, Zone::Graveyard),
            ZoneMove::Moved
        );
        // Player 0's card is untouched by player 1's move.
        assert_eq!(state.locate(id0), Some((PlayerId::new(0), Zone::Play)));
    }
}
