//! Synchronous computer turns.
//!
//! A computer seat takes its whole turn in one call: maybe an ability, then
//! placements while it keeps laying doubles, then at most one draw, then a
//! pass if nothing fits. Abilities are only considered above easy
//! difficulty. Presentation delays belong to the caller.

use crate::ai::{HeuristicPolicy, SeatPolicy};
use crate::core::{Action, Difficulty, RulesResult, SeatId};
use crate::rules::RoundResult;

use super::session::{Game, TurnOutcome};

/// What a seat did during one automated turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiTurnReport {
    pub seat: SeatId,
    /// Successful actions in order. Rejected ability attempts are omitted.
    pub actions: Vec<Action>,
    pub outcome: TurnOutcome,
}

impl Game {
    /// Play the current seat's turn with the built-in policy at the
    /// configured difficulty.
    pub fn run_ai_turn(&mut self) -> RulesResult<AiTurnReport> {
        let policy = HeuristicPolicy::new(self.config.difficulty);
        self.run_policy_turn(&policy)
    }

    /// Play the current seat's turn with `policy`.
    pub fn run_policy_turn<P: SeatPolicy + ?Sized>(&mut self, policy: &P) -> RulesResult<AiTurnReport> {
        let seat = self.current_seat();
        self.check_turn(seat)?;
        let mut actions = Vec::new();

        if self.roll_for_power_up() {
            if let Some(choice) = policy.choose_power_up(&self.state, seat, &mut self.policy_rng) {
                match self.use_power_up(seat, choice.power, choice.target) {
                    Ok(effect) => {
                        log::debug!("{seat} power-up effect: {effect:?}");
                        actions.push(Action::PowerUp {
                            power: choice.power,
                            target: choice.target,
                        });
                    }
                    Err(err) => log::debug!("{seat} skipped {}: {err}", choice.power),
                }
            }
        }

        loop {
            if let Some(mv) = policy.choose_move(&self.state, seat, &mut self.policy_rng) {
                let outcome = self.play(seat, mv.tile, mv.train)?;
                actions.push(Action::Play(mv));
                if outcome == TurnOutcome::PlayAgain {
                    continue;
                }
                return Ok(AiTurnReport { seat, actions, outcome });
            }

            if !self.state.turn().has_drawn && !self.state.boneyard().is_empty() {
                let tile = self.draw(seat)?;
                actions.push(Action::Draw(tile));
                continue;
            }

            let outcome = self.pass(seat)?;
            actions.push(Action::Pass);
            return Ok(AiTurnReport { seat, actions, outcome });
        }
    }

    /// Should this turn consult the power-up heuristic?
    ///
    /// Never on easy. The configured chance is clamped to `0.0..=1.0`; NaN
    /// counts as zero.
    fn roll_for_power_up(&mut self) -> bool {
        let chance = self.config.ai_power_up_chance;
        if self.config.difficulty == Difficulty::Easy || chance.is_nan() || chance <= 0.0 {
            return false;
        }
        self.policy_rng.gen_bool(chance.min(1.0))
    }

    /// Drive every seat with `policy` until the round ends, then return its
    /// result. Returns the stored result if the round is already scored.
    pub fn play_out_round<P: SeatPolicy + ?Sized>(&mut self, policy: &P) -> RulesResult<RoundResult> {
        if let Some(result) = self.round_result() {
            return Ok(result.clone());
        }
        loop {
            let report = self.run_policy_turn(policy)?;
            log::trace!("{} took {} actions", report.seat, report.actions.len());
            if let TurnOutcome::RoundOver(result) = report.outcome {
                return Ok(result);
            }
        }
    }
}
