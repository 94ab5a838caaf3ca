//! Legality checks and the primitive table mutations.
//!
//! These functions know the rules of placement, drawing and passing but not
//! whose turn it is; turn ownership is enforced by [`crate::game::Game`].
//! Every mutator validates first and leaves the table untouched on error.

use smallvec::SmallVec;

use crate::core::{Move, PlayViolation, RulesError, RulesResult, SeatId, TableState, Tile, TrainId};

/// Trains a seat may currently play on.
pub type PlayableTrains = SmallVec<[TrainId; 5]>;

/// The pip a tile placed on `train` must match.
#[must_use]
pub fn open_end(state: &TableState, train: TrainId) -> u8 {
    state.train(train).open_end(state.engine())
}

/// Does either pip of `tile` match the open end of `train`?
#[must_use]
pub fn can_play(state: &TableState, tile: Tile, train: TrainId) -> bool {
    tile.has(open_end(state, train))
}

/// Trains `seat` may play on, in enumeration order.
///
/// - The Mexican train, always.
/// - The seat's own train, unless the seat is frozen.
/// - Every other public train whose owner is not frozen, in the order those
///   trains went public.
#[must_use]
pub fn playable_trains(state: &TableState, seat: SeatId) -> PlayableTrains {
    let mut trains = PlayableTrains::new();
    trains.push(TrainId::Mexican);

    if !state.is_frozen(seat) {
        trains.push(TrainId::Seat(seat));
    }

    for owner in state.trains().public_seats() {
        if owner != seat && !state.is_frozen(owner) {
            trains.push(TrainId::Seat(owner));
        }
    }

    trains
}

/// Every legal placement for `seat`: hand order first, then train order.
#[must_use]
pub fn legal_moves(state: &TableState, seat: SeatId) -> Vec<Move> {
    let trains = playable_trains(state, seat);
    state
        .hand(seat)
        .iter()
        .flat_map(|tile| {
            trains
                .iter()
                .filter(move |train| can_play(state, *tile, **train))
                .map(move |train| Move::new(*tile, *train))
        })
        .collect()
}

#[must_use]
pub fn has_legal_move(state: &TableState, seat: SeatId) -> bool {
    let trains = playable_trains(state, seat);
    state
        .hand(seat)
        .iter()
        .any(|tile| trains.iter().any(|train| can_play(state, *tile, *train)))
}

/// Place `mv.tile` from `seat`'s hand onto `mv.train`.
///
/// The tile is oriented so its left pip faces the open end, appended to the
/// train and removed from the hand. `must_play_after_double` is set exactly
/// when the placed tile is a double. A public train stays public even when
/// its owner plays on it. Returns the oriented tile.
pub fn play(state: &mut TableState, mv: Move, seat: SeatId) -> RulesResult<Tile> {
    if !playable_trains(state, seat).contains(&mv.train) {
        return Err(PlayViolation::TrainNotPlayable(mv.train).into());
    }

    let end = open_end(state, mv.train);
    let oriented = mv
        .tile
        .oriented_to(end)
        .ok_or(PlayViolation::NoMatch { tile: mv.tile, open_end: end })?;

    let hand_index = state
        .hand(seat)
        .iter()
        .position(|t| *t == mv.tile)
        .ok_or(PlayViolation::NotInHand(mv.tile))?;

    state.hands[seat].remove(hand_index);
    state.trains.get_mut(mv.train).push(oriented);
    state.turn.must_play_after_double = oriented.is_double();

    log::trace!("{seat} placed {oriented} on the {}", mv.train);
    Ok(oriented)
}

/// Move the top boneyard tile into `seat`'s hand.
///
/// Turn flags are left to the caller.
pub fn draw(state: &mut TableState, seat: SeatId) -> RulesResult<Tile> {
    let tile = state.boneyard.pop().ok_or(RulesError::EmptyBoneyard)?;
    state.hands[seat].push(tile);
    Ok(tile)
}

/// Mark `seat`'s train public. Idempotent; returns `true` on the first call.
pub fn make_train_public(state: &mut TableState, seat: SeatId) -> bool {
    state.trains.make_public(seat)
}

/// Give up the turn: the seat's train goes public and `has_drawn` clears.
pub fn pass(state: &mut TableState, seat: SeatId) {
    make_train_public(state, seat);
    state.turn.has_drawn = false;
}

/// Has the round ended?
///
/// True when some hand is empty, or when the boneyard is empty and no seat
/// holds a tile that fits any train playable for that seat.
#[must_use]
pub fn is_round_over(state: &TableState) -> bool {
    if state.hands().values().any(Vec::is_empty) {
        return true;
    }
    state.boneyard().is_empty() && !SeatId::all().any(|seat| has_legal_move(state, seat))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(i: u8) -> SeatId {
        SeatId::new(i)
    }

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b)
    }

    /// Engine 12, small hands, a few boneyard tiles.
    fn table() -> TableState {
        TableState::from_parts(
            12,
            [
                vec![t(12, 3), t(5, 5), t(0, 0)],
                vec![t(12, 7), t(1, 2)],
                vec![t(4, 6)],
                vec![t(12, 12), t(8, 9)],
            ],
            vec![t(2, 2), t(11, 10)],
        )
    }

    #[test]
    fn test_open_end_and_can_play() {
        let mut state = table();
        assert_eq!(open_end(&state, TrainId::Mexican), 12);
        assert!(can_play(&state, t(3, 12), TrainId::Mexican));
        assert!(!can_play(&state, t(3, 4), TrainId::Mexican));

        play(&mut state, Move::new(t(12, 3), TrainId::Mexican), seat(0)).unwrap();
        assert_eq!(open_end(&state, TrainId::Mexican), 3);
        assert_eq!(open_end(&state, TrainId::Seat(seat(0))), 12);
    }

    #[test]
    fn test_playable_trains_private_and_public() {
        let mut state = table();
        assert_eq!(
            playable_trains(&state, seat(1)).as_slice(),
            &[TrainId::Mexican, TrainId::Seat(seat(1))]
        );

        make_train_public(&mut state, seat(3));
        make_train_public(&mut state, seat(0));
        assert_eq!(
            playable_trains(&state, seat(1)).as_slice(),
            &[
                TrainId::Mexican,
                TrainId::Seat(seat(1)),
                TrainId::Seat(seat(3)),
                TrainId::Seat(seat(0))
            ]
        );
        // Own public train is listed once.
        assert_eq!(
            playable_trains(&state, seat(3)).as_slice(),
            &[TrainId::Mexican, TrainId::Seat(seat(3)), TrainId::Seat(seat(0))]
        );
    }

    #[test]
    fn test_frozen_owner_blocks_train() {
        let mut state = table();
        make_train_public(&mut state, seat(2));
        state.frozen.insert(seat(2));

        // Others cannot use a frozen seat's public train.
        assert!(!playable_trains(&state, seat(1)).contains(&TrainId::Seat(seat(2))));
        // The frozen seat loses its own train but keeps the Mexican train.
        assert_eq!(playable_trains(&state, seat(2)).as_slice(), &[TrainId::Mexican]);
    }

    #[test]
    fn test_play_orients_and_removes() {
        let mut state = table();
        let oriented = play(&mut state, Move::new(t(7, 12), TrainId::Seat(seat(1))), seat(1)).unwrap();

        assert_eq!((oriented.left, oriented.right), (12, 7));
        assert_eq!(state.hand(seat(1)), &[t(1, 2)]);
        assert_eq!(state.train(TrainId::Seat(seat(1))).len(), 1);
        assert!(!state.turn().must_play_after_double);
    }

    #[test]
    fn test_play_double_sets_flag() {
        let mut state = table();
        play(&mut state, Move::new(t(12, 12), TrainId::Mexican), seat(3)).unwrap();
        assert!(state.turn().must_play_after_double);

        // Any later non-double clears it again.
        state.hands[seat(3)].push(t(12, 1));
        play(&mut state, Move::new(t(12, 1), TrainId::Mexican), seat(3)).unwrap();
        assert!(!state.turn().must_play_after_double);
    }

    #[test]
    fn test_play_rejects_mismatch_without_mutation() {
        let mut state = table();
        let before = state.snapshot();

        let err = play(&mut state, Move::new(t(5, 5), TrainId::Mexican), seat(0)).unwrap_err();
        assert_eq!(
            err,
            RulesError::IllegalPlay(PlayViolation::NoMatch { tile: t(5, 5), open_end: 12 })
        );
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_play_rejects_private_train() {
        let mut state = table();
        let before = state.snapshot();

        let err = play(&mut state, Move::new(t(12, 3), TrainId::Seat(seat(1))), seat(0)).unwrap_err();
        assert_eq!(
            err,
            RulesError::IllegalPlay(PlayViolation::TrainNotPlayable(TrainId::Seat(seat(1))))
        );
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_play_rejects_tile_not_in_hand() {
        let mut state = table();
        let err = play(&mut state, Move::new(t(12, 7), TrainId::Mexican), seat(0)).unwrap_err();
        assert_eq!(err, RulesError::IllegalPlay(PlayViolation::NotInHand(t(12, 7))));
        assert!(state.train(TrainId::Mexican).is_empty());
    }

    #[test]
    fn test_public_train_stays_public_after_owner_plays() {
        let mut state = table();
        make_train_public(&mut state, seat(0));
        play(&mut state, Move::new(t(12, 3), TrainId::Seat(seat(0))), seat(0)).unwrap();
        assert!(state.trains().is_public(TrainId::Seat(seat(0))));
    }

    #[test]
    fn test_draw() {
        let mut state = table();
        assert_eq!(draw(&mut state, seat(2)).unwrap(), t(11, 10));
        assert_eq!(state.hand(seat(2)).len(), 2);
        assert_eq!(draw(&mut state, seat(2)).unwrap(), t(2, 2));
        assert_eq!(draw(&mut state, seat(2)), Err(RulesError::EmptyBoneyard));
        assert_eq!(state.hand(seat(2)).len(), 3);
        assert!(!state.turn().has_drawn);
    }

    #[test]
    fn test_pass_makes_public_and_clears_draw() {
        let mut state = table();
        state.turn.has_drawn = true;
        pass(&mut state, seat(0));
        assert!(state.trains().is_public(TrainId::Seat(seat(0))));
        assert!(!state.turn().has_drawn);

        // Idempotent
        assert!(!make_train_public(&mut state, seat(0)));
    }

    #[test]
    fn test_legal_moves_order() {
        let mut state = table();
        make_train_public(&mut state, seat(1));
        let moves = legal_moves(&state, seat(0));
        assert_eq!(
            moves,
            vec![
                Move::new(t(12, 3), TrainId::Mexican),
                Move::new(t(12, 3), TrainId::Seat(seat(0))),
                Move::new(t(12, 3), TrainId::Seat(seat(1))),
            ]
        );
        assert!(legal_moves(&state, seat(2)).is_empty());
    }

    #[test]
    fn test_round_over_when_hand_empty() {
        let mut state = table();
        assert!(!is_round_over(&state));
        state.hands[seat(2)].clear();
        assert!(is_round_over(&state));
    }

    #[test]
    fn test_stalemate_detection() {
        let blocked = TableState::from_parts(
            12,
            [vec![t(1, 2)], vec![t(3, 4)], vec![t(5, 6)], vec![t(7, 8)]],
            Vec::new(),
        );
        assert!(is_round_over(&blocked));

        let one_move = TableState::from_parts(
            12,
            [vec![t(1, 2)], vec![t(3, 4)], vec![t(5, 12)], vec![t(7, 8)]],
            Vec::new(),
        );
        assert!(!is_round_over(&one_move));
    }

    #[test]
    fn test_no_stalemate_while_boneyard_has_tiles() {
        let state = TableState::from_parts(
            12,
            [vec![t(1, 2)], vec![t(3, 4)], vec![t(5, 6)], vec![t(7, 8)]],
            vec![t(9, 9)],
        );
        assert!(!is_round_over(&state));
    }

    #[test]
    fn test_stalemate_counts_frozen_trains_as_blocked() {
        // Seat 2 can only play on its own train, but it is frozen.
        let mut state = TableState::from_parts(
            12,
            [vec![t(1, 2)], vec![t(3, 4)], vec![t(5, 6)], vec![t(7, 8)]],
            Vec::new(),
        );
        state.trains.get_mut(TrainId::Mexican).push(t(12, 0));
        state.trains.get_mut(TrainId::Seat(seat(2))).push(t(12, 5));
        state.frozen.insert(seat(2));
        assert!(is_round_over(&state));

        state.frozen.clear();
        assert!(!is_round_over(&state));
    }
}
