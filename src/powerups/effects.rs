//! Power-up effects over the table.
//!
//! Each function checks, in order: the ability is still held and no ability
//! was used this turn (`PowerupUnavailable`), then the ability's own
//! preconditions. Only then does it mutate, spend the ability and mark the
//! turn as having used one.

use crate::core::{GameRng, Ineligibility, RulesError, RulesResult, SeatId, TableState, Tile};
use crate::rules;

use super::PowerUp;

fn ensure_available(state: &TableState, seat: SeatId, power: PowerUp) -> RulesResult<()> {
    if state.turn().power_up_used || !state.power_ups(seat).is_available(power) {
        return Err(RulesError::PowerupUnavailable(power));
    }
    Ok(())
}

fn ensure_other(actor: SeatId, target: SeatId, power: PowerUp) -> RulesResult<()> {
    if actor == target {
        return Err(RulesError::PowerupIneligible(power, Ineligibility::SelfTarget));
    }
    Ok(())
}

fn spend(state: &mut TableState, seat: SeatId, power: PowerUp) {
    state.power_ups[seat].consume(power);
    state.turn.power_up_used = true;
}

/// Wild Shuffle: return the whole hand to the boneyard, reshuffle, and draw
/// back the same number of tiles.
///
/// Requires the boneyard to hold at least as many tiles as the hand. Returns
/// the number of tiles exchanged.
pub fn use_wild(state: &mut TableState, seat: SeatId, rng: &mut GameRng) -> RulesResult<usize> {
    ensure_available(state, seat, PowerUp::Wild)?;

    let hand = state.hand(seat).len();
    let boneyard = state.boneyard().len();
    if boneyard < hand {
        return Err(RulesError::PowerupIneligible(
            PowerUp::Wild,
            Ineligibility::InsufficientBoneyard { boneyard, hand },
        ));
    }

    let returned = std::mem::take(&mut state.hands[seat]);
    state.boneyard.extend(returned);
    rng.shuffle(&mut state.boneyard);

    let split = state.boneyard.len() - hand;
    // Drawn one at a time from the top, so the hand receives them in pop order.
    let drawn: Vec<Tile> = state.boneyard.drain(split..).rev().collect();
    state.hands[seat] = drawn;

    spend(state, seat, PowerUp::Wild);
    Ok(hand)
}

/// Sabotage: `target` draws the top boneyard tile. The actor's hand is
/// untouched. Returns the tile the target received.
pub fn use_sabotage(state: &mut TableState, actor: SeatId, target: SeatId) -> RulesResult<Tile> {
    ensure_available(state, actor, PowerUp::Sabotage)?;
    ensure_other(actor, target, PowerUp::Sabotage)?;

    let tile = rules::draw(state, target)?;
    spend(state, actor, PowerUp::Sabotage);
    Ok(tile)
}

/// Freeze: `target` skips its next turn. A seat cannot be frozen twice.
pub fn use_freeze(state: &mut TableState, actor: SeatId, target: SeatId) -> RulesResult<()> {
    ensure_available(state, actor, PowerUp::Freeze)?;
    ensure_other(actor, target, PowerUp::Freeze)?;
    if state.is_frozen(target) {
        return Err(RulesError::PowerupIneligible(
            PowerUp::Freeze,
            Ineligibility::TargetFrozen(target),
        ));
    }

    state.frozen.insert(target);
    spend(state, actor, PowerUp::Freeze);
    Ok(())
}

/// Oracle: reveal the tile the next draw would take, without taking it.
pub fn use_oracle(state: &mut TableState, seat: SeatId) -> RulesResult<Tile> {
    ensure_available(state, seat, PowerUp::Oracle)?;
    let next = *state.boneyard().last().ok_or(RulesError::EmptyBoneyard)?;

    spend(state, seat, PowerUp::Oracle);
    Ok(next)
}
