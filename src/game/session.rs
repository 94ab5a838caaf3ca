//! The game driver.
//!
//! [`Game`] owns the table plus everything that outlives a round: names,
//! running totals, round history and the action log. It layers turn
//! ownership over the pure rules in [`crate::rules`] and
//! [`crate::powerups`], and advances the turn itself once an action
//! completes.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    Action, ActionRecord, Difficulty, GameConfig, GameRng, Ineligibility, Move, RulesError, RulesResult, SeatId,
    SeatMap, TableSnapshot, TableState, Tile, TrainId, TurnViolation, ROUND_COUNT, SEAT_COUNT,
};
use crate::powerups::{self, PowerUp};
use crate::rules::{self, GameOutcome, PlayableTrains, RoundResult};

/// Seats skipped because they were frozen.
pub type SkippedSeats = SmallVec<[SeatId; SEAT_COUNT]>;

/// What happened to the turn after a play or pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A double was placed; the same seat plays again.
    PlayAgain,
    /// The turn moved on to `next`.
    Advanced { next: SeatId, skipped: SkippedSeats },
    /// The action ended the round, which has been scored.
    RoundOver(RoundResult),
}

/// Result of [`Game::advance_round`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundAdvance {
    /// A fresh round was dealt.
    Next { round: usize, engine: u8 },
    /// All rounds are scored.
    GameOver(GameOutcome),
}

/// Effect of a dispatched ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpEffect {
    /// Number of tiles exchanged.
    Shuffled(usize),
    Sabotaged { target: SeatId, tile: Tile },
    Froze(SeatId),
    /// The tile the next draw would take.
    Revealed(Tile),
}

/// Everything a renderer needs, in one serializable value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub table: TableSnapshot,
    pub names: SeatMap<String>,
    pub difficulty: Difficulty,
    pub totals: SeatMap<u32>,
    /// Per-seat scores of every finished round, oldest first.
    pub round_scores: Vec<SeatMap<u32>>,
    /// The current round has been scored.
    pub round_finished: bool,
}

/// A game of thirteen rounds between the human seat and three opponents.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) config: GameConfig,
    names: SeatMap<String>,
    pub(super) state: TableState,
    deal_rng: GameRng,
    pub(super) policy_rng: GameRng,
    totals: SeatMap<u32>,
    rounds: Vec<RoundResult>,
    /// Set once the current round is scored.
    round_result: Option<RoundResult>,
    history: Vector<ActionRecord>,
    next_sequence: u32,
}

impl Game {
    /// Start a new game: pick opponent names, zero the totals and deal
    /// round 0.
    pub fn new(config: GameConfig) -> Self {
        let base = GameRng::new(config.seed);
        let names = pick_names(&config, &mut base.for_context("names"));
        let mut deal_rng = base.for_context("deal");
        let policy_rng = base.for_context("policy");

        let state = TableState::deal(0, SeatMap::with_default(), &mut deal_rng);
        log::info!(
            "new {} game, seed {}, opponents {}, {}, {}",
            config.difficulty,
            config.seed,
            names[SeatId::new(1)],
            names[SeatId::new(2)],
            names[SeatId::new(3)],
        );

        Self {
            config,
            names,
            state,
            deal_rng,
            policy_rng,
            totals: SeatMap::with_default(),
            rounds: Vec::with_capacity(ROUND_COUNT),
            round_result: None,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    #[must_use]
    pub fn names(&self) -> &SeatMap<String> {
        &self.names
    }

    #[must_use]
    pub fn name(&self, seat: SeatId) -> &str {
        &self.names[seat]
    }

    /// The current round's table.
    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    #[must_use]
    pub fn round(&self) -> usize {
        self.state.round()
    }

    #[must_use]
    pub fn engine(&self) -> u8 {
        self.state.engine()
    }

    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.state.turn().current
    }

    #[must_use]
    pub fn totals(&self) -> &SeatMap<u32> {
        &self.totals
    }

    /// Every scored round, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Result of the current round, once scored.
    #[must_use]
    pub fn round_result(&self) -> Option<&RoundResult> {
        self.round_result.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Has the current round been scored?
    #[must_use]
    pub fn is_round_finished(&self) -> bool {
        self.round_result.is_some()
    }

    /// Are all thirteen rounds scored?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.rounds.len() == ROUND_COUNT
    }

    #[must_use]
    pub fn playable_trains(&self, seat: SeatId) -> PlayableTrains {
        rules::playable_trains(&self.state, seat)
    }

    #[must_use]
    pub fn legal_moves(&self, seat: SeatId) -> Vec<Move> {
        rules::legal_moves(&self.state, seat)
    }

    #[must_use]
    pub fn open_end(&self, train: TrainId) -> u8 {
        rules::open_end(&self.state, train)
    }

    /// Pip match only; see [`Game::playable_trains`] for access.
    #[must_use]
    pub fn can_play(&self, tile: Tile, train: TrainId) -> bool {
        rules::can_play(&self.state, tile, train)
    }

    /// Has the round ended, scored or not?
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        rules::is_round_over(&self.state)
    }

    /// Penalties for the hands as they stand now.
    #[must_use]
    pub fn round_scores(&self) -> SeatMap<u32> {
        rules::round_scores(self.state.hands())
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            table: self.state.snapshot(),
            names: self.names.clone(),
            difficulty: self.config.difficulty,
            totals: self.totals.clone(),
            round_scores: self.rounds.iter().map(|r| r.scores.clone()).collect(),
            round_finished: self.is_round_finished(),
        }
    }

    // === Commands ===

    /// Place `tile` from `seat`'s hand on `train`.
    pub fn play(&mut self, seat: SeatId, tile: Tile, train: TrainId) -> RulesResult<TurnOutcome> {
        self.check_turn(seat)?;
        let mv = Move::new(tile, train);
        rules::play(&mut self.state, mv, seat)
            .inspect_err(|err| log::debug!("{seat} play rejected: {err}"))?;
        self.record(seat, Action::Play(mv));

        if rules::is_round_over(&self.state) {
            return Ok(TurnOutcome::RoundOver(self.finish_round()));
        }
        if self.state.turn().must_play_after_double {
            log::debug!("{seat} placed a double and plays again");
            return Ok(TurnOutcome::PlayAgain);
        }
        Ok(self.advance_turn())
    }

    /// Draw the top boneyard tile. Once per turn.
    pub fn draw(&mut self, seat: SeatId) -> RulesResult<Tile> {
        self.check_turn(seat)?;
        if self.state.turn().has_drawn {
            log::debug!("{seat} rejected: {}", TurnViolation::AlreadyDrawn);
            return Err(TurnViolation::AlreadyDrawn.into());
        }

        let tile = rules::draw(&mut self.state, seat)
            .inspect_err(|err| log::debug!("{seat} draw rejected: {err}"))?;
        self.state.turn.has_drawn = true;
        self.record(seat, Action::Draw(tile));
        Ok(tile)
    }

    /// End the turn without playing. The seat must have drawn unless the
    /// boneyard is empty; its train becomes public.
    pub fn pass(&mut self, seat: SeatId) -> RulesResult<TurnOutcome> {
        self.check_turn(seat)?;
        if !self.state.turn().has_drawn && !self.state.boneyard().is_empty() {
            log::debug!("{seat} rejected: {}", TurnViolation::MustDrawFirst);
            return Err(TurnViolation::MustDrawFirst.into());
        }

        rules::pass(&mut self.state, seat);
        self.record(seat, Action::Pass);

        if rules::is_round_over(&self.state) {
            return Ok(TurnOutcome::RoundOver(self.finish_round()));
        }
        Ok(self.advance_turn())
    }

    pub fn use_wild(&mut self, seat: SeatId) -> RulesResult<usize> {
        self.check_turn(seat)?;
        let exchanged = powerups::use_wild(&mut self.state, seat, &mut self.deal_rng)
            .inspect_err(|err| log_power_up_rejection(seat, err))?;
        self.record_power_up(seat, PowerUp::Wild, None);
        Ok(exchanged)
    }

    pub fn use_sabotage(&mut self, seat: SeatId, target: SeatId) -> RulesResult<Tile> {
        self.check_turn(seat)?;
        let tile = powerups::use_sabotage(&mut self.state, seat, target)
            .inspect_err(|err| log_power_up_rejection(seat, err))?;
        self.record_power_up(seat, PowerUp::Sabotage, Some(target));
        Ok(tile)
    }

    pub fn use_freeze(&mut self, seat: SeatId, target: SeatId) -> RulesResult<()> {
        self.check_turn(seat)?;
        powerups::use_freeze(&mut self.state, seat, target)
            .inspect_err(|err| log_power_up_rejection(seat, err))?;
        self.record_power_up(seat, PowerUp::Freeze, Some(target));
        Ok(())
    }

    pub fn use_oracle(&mut self, seat: SeatId) -> RulesResult<Tile> {
        self.check_turn(seat)?;
        let tile = powerups::use_oracle(&mut self.state, seat)
            .inspect_err(|err| log_power_up_rejection(seat, err))?;
        self.record_power_up(seat, PowerUp::Oracle, None);
        Ok(tile)
    }

    /// Use any ability. `target` is required for Sabotage and Freeze and
    /// ignored otherwise.
    pub fn use_power_up(
        &mut self,
        seat: SeatId,
        power: PowerUp,
        target: Option<SeatId>,
    ) -> RulesResult<PowerUpEffect> {
        let target = match (power.needs_target(), target) {
            (true, None) => return Err(RulesError::PowerupIneligible(power, Ineligibility::MissingTarget)),
            (_, target) => target.unwrap_or(seat),
        };
        match power {
            PowerUp::Wild => self.use_wild(seat).map(PowerUpEffect::Shuffled),
            PowerUp::Sabotage => self
                .use_sabotage(seat, target)
                .map(|tile| PowerUpEffect::Sabotaged { target, tile }),
            PowerUp::Freeze => self.use_freeze(seat, target).map(|()| PowerUpEffect::Froze(target)),
            PowerUp::Oracle => self.use_oracle(seat).map(PowerUpEffect::Revealed),
        }
    }

    /// Score the current round.
    ///
    /// Returns the stored result if the round was already scored.
    pub fn end_round(&mut self) -> RulesResult<RoundResult> {
        if let Some(result) = &self.round_result {
            return Ok(result.clone());
        }
        if !rules::is_round_over(&self.state) {
            return Err(TurnViolation::RoundInProgress.into());
        }
        Ok(self.finish_round())
    }

    /// Deal the next round, or finish the game after the last one.
    pub fn advance_round(&mut self) -> RulesResult<RoundAdvance> {
        if self.round_result.is_none() {
            return Err(TurnViolation::RoundInProgress.into());
        }
        if self.is_game_over() {
            return self.end_game().map(RoundAdvance::GameOver);
        }

        let round = self.state.round() + 1;
        self.reset(round);
        Ok(RoundAdvance::Next {
            round,
            engine: self.state.engine(),
        })
    }

    /// Final standings. Requires every round to be scored.
    pub fn end_game(&self) -> RulesResult<GameOutcome> {
        if !self.is_game_over() {
            return Err(TurnViolation::GameNotFinished.into());
        }
        let outcome = rules::final_standings(&self.totals, &self.names);
        log::info!("game over, winner {} ({})", self.names[outcome.winner], outcome.winner);
        Ok(outcome)
    }

    // === Internals ===

    pub(super) fn check_turn(&self, seat: SeatId) -> RulesResult<()> {
        let current = self.current_seat();
        let violation = if self.round_result.is_some() {
            TurnViolation::RoundOver
        } else if seat != current {
            TurnViolation::NotYourTurn { seat, current }
        } else {
            return Ok(());
        };
        log::debug!("{seat} rejected: {violation}");
        Err(violation.into())
    }

    fn record(&mut self, seat: SeatId, action: Action) {
        log::debug!("{seat}: {action}");
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.history
            .push_back(ActionRecord::new(seat, action, self.state.round(), sequence));
    }

    fn record_power_up(&mut self, seat: SeatId, power: PowerUp, target: Option<SeatId>) {
        self.record(seat, Action::PowerUp { power, target });
    }

    /// Hand the turn to the next seat, thawing and skipping frozen ones.
    fn advance_turn(&mut self) -> TurnOutcome {
        let mut next = self.current_seat().next();
        let mut skipped = SkippedSeats::new();
        // Each pass removes a seat from the frozen set, so this ends.
        while self.state.frozen.remove(&next) {
            log::debug!("{next} is frozen and skips a turn");
            skipped.push(next);
            next = next.next();
        }
        self.state.begin_turn(next);
        TurnOutcome::Advanced { next, skipped }
    }

    fn finish_round(&mut self) -> RoundResult {
        let scores = rules::round_scores(self.state.hands());
        for (seat, total) in self.totals.iter_mut() {
            *total += scores[seat];
        }
        let result = RoundResult {
            round: self.state.round(),
            engine: self.state.engine(),
            winner: rules::round_winner(&scores),
            scores,
            totals: self.totals.clone(),
        };
        log::info!(
            "round {} (engine {}) won by {}; scores {:?}",
            result.round + 1,
            result.engine,
            result.winner,
            result.scores.values().collect::<Vec<_>>(),
        );

        self.rounds.push(result.clone());
        self.round_result = Some(result.clone());
        result
    }

    fn reset(&mut self, round: usize) {
        let inventories = self.state.power_up_inventories().clone();
        self.state = TableState::deal(round, inventories, &mut self.deal_rng);
        self.round_result = None;
        log::info!("round {} dealt, engine {}", round + 1, self.state.engine());
    }
}

fn log_power_up_rejection(seat: SeatId, err: &RulesError) {
    log::debug!("{seat} power-up rejected: {err}");
}

/// Seat 0 gets the human name; seats 1-3 get distinct pool names in random
/// order.
fn pick_names(config: &GameConfig, rng: &mut GameRng) -> SeatMap<String> {
    let mut pool: Vec<&str> = Vec::with_capacity(config.opponent_pool.len());
    for name in &config.opponent_pool {
        if !pool.contains(&name.as_str()) {
            pool.push(name);
        }
    }
    rng.shuffle(&mut pool);

    SeatMap::new(|seat| {
        if seat.is_human() {
            config.human_name.clone()
        } else {
            pool.get(seat.index() - 1)
                .map_or_else(|| format!("Opponent {}", seat.index()), |name| (*name).to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ENGINE_SEQUENCE, SET_SIZE};

    fn seat(i: u8) -> SeatId {
        SeatId::new(i)
    }

    fn game() -> Game {
        Game::new(GameConfig::new(Difficulty::Medium).with_seed(42))
    }

    /// A game whose table is replaced by a hand-built round-0 layout.
    fn game_with(engine: u8, hands: [Vec<Tile>; SEAT_COUNT], boneyard: Vec<Tile>) -> Game {
        let mut game = game();
        game.state = TableState::from_parts(engine, hands, boneyard);
        game
    }

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b)
    }

    #[test]
    fn test_new_game() {
        let game = game();
        assert_eq!(game.round(), 0);
        assert_eq!(game.engine(), 12);
        assert_eq!(game.current_seat(), SeatId::HUMAN);
        assert!(game.totals().values().all(|t| *t == 0));
        assert!(game.history().is_empty());
        assert_eq!(game.state().boneyard().len(), SET_SIZE - 60);
        assert_eq!(game.name(SeatId::HUMAN), "You");
    }

    #[test]
    fn test_opponent_names_distinct_and_from_pool() {
        let game = game();
        let pool = &game.config().opponent_pool;
        let opponents: Vec<&str> = (1..4).map(|i| game.name(seat(i))).collect();
        for name in &opponents {
            assert!(pool.iter().any(|p| p == name));
        }
        assert_ne!(opponents[0], opponents[1]);
        assert_ne!(opponents[1], opponents[2]);
        assert_ne!(opponents[0], opponents[2]);
    }

    #[test]
    fn test_duplicate_pool_names_collapse() {
        let config = GameConfig::new(Difficulty::Easy)
            .with_seed(1)
            .with_opponent_pool(["Ada", "Ada", "Ada", "Bo"]);
        let game = Game::new(config);
        let opponents: Vec<&str> = (1..4).map(|i| game.name(seat(i))).collect();
        assert!(opponents.contains(&"Ada"));
        assert!(opponents.contains(&"Bo"));
        assert!(opponents.contains(&"Opponent 3"));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = game();
        let b = game();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_not_your_turn() {
        let mut game = game();
        let err = game.draw(seat(2)).unwrap_err();
        assert_eq!(
            err,
            RulesError::InvalidTurn(TurnViolation::NotYourTurn {
                seat: seat(2),
                current: seat(0)
            })
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_draw_once_per_turn() {
        let mut game = game();
        let top = *game.state().boneyard().last().unwrap();
        assert_eq!(game.draw(seat(0)).unwrap(), top);
        assert!(game.state().turn().has_drawn);
        assert_eq!(
            game.draw(seat(0)),
            Err(RulesError::InvalidTurn(TurnViolation::AlreadyDrawn))
        );
        assert_eq!(game.state().hand(seat(0)).len(), 16);
    }

    #[test]
    fn test_pass_requires_draw() {
        let mut game = game();
        assert_eq!(
            game.pass(seat(0)),
            Err(RulesError::InvalidTurn(TurnViolation::MustDrawFirst))
        );
        assert!(!game.state().trains().is_public(TrainId::Seat(seat(0))));

        game.draw(seat(0)).unwrap();
        let outcome = game.pass(seat(0)).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Advanced {
                next: seat(1),
                skipped: SkippedSeats::new()
            }
        );
        assert!(game.state().trains().is_public(TrainId::Seat(seat(0))));
        assert!(!game.state().turn().has_drawn);
    }

    #[test]
    fn test_pass_with_empty_boneyard() {
        let mut game = game_with(
            12,
            [vec![t(1, 1)], vec![t(12, 3)], vec![t(2, 2)], vec![t(4, 4)]],
            vec![],
        );
        // Seat 1 can still play, so the round continues.
        let outcome = game.pass(seat(0)).unwrap();
        assert!(matches!(outcome, TurnOutcome::Advanced { next, .. } if next == seat(1)));
    }

    #[test]
    fn test_double_plays_again() {
        let mut game = game_with(
            12,
            [vec![t(12, 12), t(12, 5), t(0, 0)], vec![t(1, 2)], vec![t(3, 4)], vec![t(5, 6)]],
            vec![t(7, 8)],
        );
        let outcome = game.play(seat(0), t(12, 12), TrainId::Seat(seat(0))).unwrap();
        assert_eq!(outcome, TurnOutcome::PlayAgain);
        assert_eq!(game.current_seat(), seat(0));
        assert!(game.state().turn().must_play_after_double);

        let outcome = game.play(seat(0), t(12, 5), TrainId::Mexican).unwrap();
        assert!(matches!(outcome, TurnOutcome::Advanced { next, .. } if next == seat(1)));
        assert!(!game.state().turn().must_play_after_double);
    }

    #[test]
    fn test_illegal_play_leaves_state() {
        let mut game = game_with(
            12,
            [vec![t(3, 4)], vec![t(1, 2)], vec![t(3, 5)], vec![t(5, 6)]],
            vec![t(7, 8)],
        );
        let before = game.snapshot();
        let err = game.play(seat(0), t(3, 4), TrainId::Mexican).unwrap_err();
        assert!(matches!(err, RulesError::IllegalPlay(_)));
        assert_eq!(game.snapshot(), before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_freeze_skips_next_turn_once() {
        let mut game = game();
        game.use_freeze(seat(0), seat(1)).unwrap();
        assert!(game.state().is_frozen(seat(1)));

        game.draw(seat(0)).unwrap();
        let outcome = game.pass(seat(0)).unwrap();
        let mut skipped = SkippedSeats::new();
        skipped.push(seat(1));
        assert_eq!(outcome, TurnOutcome::Advanced { next: seat(2), skipped });
        assert!(!game.state().is_frozen(seat(1)));
        assert_eq!(game.current_seat(), seat(2));
    }

    #[test]
    fn test_all_others_frozen_returns_to_actor() {
        let mut game = game();
        for i in 1..4 {
            game.state.frozen.insert(seat(i));
        }
        game.draw(seat(0)).unwrap();
        let outcome = game.pass(seat(0)).unwrap();
        match outcome {
            TurnOutcome::Advanced { next, skipped } => {
                assert_eq!(next, seat(0));
                assert_eq!(skipped.as_slice(), &[seat(1), seat(2), seat(3)]);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(game.state().frozen_seats().is_empty());
    }

    #[test]
    fn test_power_up_recorded_and_once_per_turn() {
        let mut game = game();
        let peek = game.use_oracle(seat(0)).unwrap();
        assert_eq!(peek, *game.state().boneyard().last().unwrap());
        assert_eq!(
            game.use_power_up(seat(0), PowerUp::Wild, None),
            Err(RulesError::PowerupUnavailable(PowerUp::Wild))
        );
        let last = game.history().last().unwrap();
        assert_eq!(last.action, Action::PowerUp { power: PowerUp::Oracle, target: None });
    }

    #[test]
    fn test_use_power_up_needs_target() {
        let mut game = game();
        assert_eq!(
            game.use_power_up(seat(0), PowerUp::Freeze, None),
            Err(RulesError::PowerupIneligible(PowerUp::Freeze, Ineligibility::MissingTarget))
        );
        assert_eq!(
            game.use_power_up(seat(0), PowerUp::Freeze, Some(seat(2))),
            Ok(PowerUpEffect::Froze(seat(2)))
        );
    }

    #[test]
    fn test_domino_ends_round() {
        let mut game = game_with(
            12,
            [vec![t(12, 3)], vec![t(0, 0)], vec![t(3, 4)], vec![t(12, 12)]],
            vec![t(7, 8)],
        );
        let outcome = game.play(seat(0), t(12, 3), TrainId::Mexican).unwrap();
        let TurnOutcome::RoundOver(result) = outcome else {
            panic!("round should be over");
        };
        assert_eq!(result.scores.values().copied().collect::<Vec<_>>(), vec![0, 50, 7, 24]);
        assert_eq!(result.winner, seat(0));
        assert_eq!(game.totals().values().copied().collect::<Vec<_>>(), vec![0, 50, 7, 24]);

        // Further commands are rejected; scoring is idempotent.
        assert_eq!(game.draw(seat(1)), Err(RulesError::InvalidTurn(TurnViolation::RoundOver)));
        assert_eq!(game.end_round().unwrap(), result);
        assert_eq!(game.rounds().len(), 1);
    }

    #[test]
    fn test_end_round_in_progress() {
        let mut game = game();
        assert_eq!(
            game.end_round(),
            Err(RulesError::InvalidTurn(TurnViolation::RoundInProgress))
        );
        assert_eq!(
            game.advance_round(),
            Err(RulesError::InvalidTurn(TurnViolation::RoundInProgress))
        );
        assert_eq!(game.end_game(), Err(RulesError::InvalidTurn(TurnViolation::GameNotFinished)));
    }

    #[test]
    fn test_advance_round_carries_power_ups() {
        let mut game = game();
        game.use_oracle(seat(0)).unwrap();
        game.state.hands[seat(2)].clear();
        game.end_round().unwrap();

        let advance = game.advance_round().unwrap();
        assert_eq!(advance, RoundAdvance::Next { round: 1, engine: ENGINE_SEQUENCE[1] });
        assert!(!game.state().power_ups(seat(0)).oracle);
        assert!(game.state().power_ups(seat(0)).wild);
        assert_eq!(game.current_seat(), SeatId::HUMAN);
        assert!(!game.is_round_finished());
        assert!(game.state().frozen_seats().is_empty());
        assert_eq!(game.state().boneyard().len(), SET_SIZE - 60);
    }

    #[test]
    fn test_snapshot_carries_totals() {
        let mut game = game();
        game.state.hands[seat(1)].clear();
        game.end_round().unwrap();
        let snapshot = game.snapshot();
        assert!(snapshot.round_finished);
        assert_eq!(snapshot.round_scores.len(), 1);
        assert_eq!(snapshot.totals, game.totals().clone());
        assert_eq!(snapshot.totals[seat(1)], 0);
    }

    #[test]
    fn test_game_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Game>();
    }
}
