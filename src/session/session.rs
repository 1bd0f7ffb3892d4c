//! Session: one game plus the input-layer orchestration around it.
//!
//! The session is what an input layer talks to. It turns pointer gestures
//! (pick up, drop, click the stock) into rule calls, enforces the
//! preconditions the primitives leave to their caller, and reports every
//! visible change as a [`GameEvent`] so presentation code can animate it.
//!
//! State changes happen immediately; animation is layered on top by the
//! caller and never delays the rules.

use serde::{Deserialize, Serialize};

use crate::core::action::Move;
use crate::core::config::SessionConfig;
use crate::core::error::{EngineError, Result};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::spider::{self, MoveOutcome};
use crate::rules::{can_drop, check_win, deal_stock, init_game, GameResult, RulesEngine, SpiderRules};
use crate::tableau::{CarriedRun, DragState};

/// A visible change produced by a session call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game was dealt.
    NewGame { seed: u64 },
    /// The carried run landed on `to`.
    Dropped { from: usize, to: usize, count: usize },
    /// The carried run went back to its source column.
    Returned { column: usize, count: usize },
    /// One card was dealt onto each column from the stock.
    Dealt { count: usize },
    /// A King-to-Ace run left `column`; `slot` is its index in the
    /// completed pile.
    SequenceCompleted { column: usize, slot: usize },
    /// The top card of `column` was turned face-up.
    Flipped { column: usize },
    /// The game was won.
    Won,
}

/// A running game.
#[derive(Clone, Debug)]
pub struct Session {
    rules: SpiderRules,
    state: GameState,
    seed: Option<u64>,
    assist_mode: bool,
}

impl Session {
    /// Deal a new game from `config`.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            rules: SpiderRules::new(),
            state: init_game(&mut rng),
            seed: Some(rng.seed()),
            assist_mode: config.assist_mode,
        }
    }

    /// Deal a new game from `seed` with assist mode off.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SessionConfig::default().with_seed(seed))
    }

    /// Wrap an existing state, e.g. a hand-built layout.
    #[must_use]
    pub fn from_state(state: GameState, assist_mode: bool) -> Self {
        Self {
            rules: SpiderRules::new(),
            state,
            seed: None,
            assist_mode,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed of the current deal; `None` for states built by hand.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn assist_mode(&self) -> bool {
        self.assist_mode
    }

    /// Flip assist mode; returns the new setting.
    ///
    /// Takes effect from the next drag.
    pub fn toggle_assist(&mut self) -> bool {
        self.assist_mode = !self.assist_mode;
        self.assist_mode
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        check_win(&self.state)
    }

    /// Terminal result, if the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Every legal move in the current state.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.legal_moves(&self.state)
    }

    /// Throw the current game away and deal a new one.
    ///
    /// An in-flight drag is discarded with the old state.
    pub fn restart(&mut self, seed: Option<u64>) -> Vec<GameEvent> {
        let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        self.state = init_game(&mut rng);
        let seed = rng.seed();
        self.seed = Some(seed);
        vec![GameEvent::NewGame { seed }]
    }

    /// Pick up the run starting at `column[index]`.
    ///
    /// In assist mode the returned drag lists the columns that accept it.
    pub fn begin_drag(&mut self, column: usize, index: usize) -> Result<&DragState> {
        spider::ensure_idle(&self.state)?;
        spider::check_drag(&self.state, column, index)?;

        let cards: CarriedRun = self.state.tableau_mut()[column]
            .split_off(index)
            .into_iter()
            .collect();
        let valid_drops = match cards.first() {
            Some(lead) if self.assist_mode => spider::valid_drops(self.state.tableau(), lead, column),
            _ => Vec::new(),
        };
        log::debug!("picked up {} card(s) from column {column}", cards.len());

        self.state.set_drag(DragState::new(cards, column, valid_drops));
        self.state.drag().ok_or(EngineError::NoActiveDrag)
    }

    /// Finish the drag.
    ///
    /// If `target` is another column that accepts the run, the cards land
    /// there, completed sequences are removed and exposed tops flipped.
    /// Otherwise (no target, the source column, an out-of-range index, or
    /// a column that refuses the run) the cards go back where they came
    /// from. Either way the drag ends.
    pub fn end_drag(&mut self, target: Option<usize>) -> Result<Vec<GameEvent>> {
        let drag = self.state.take_drag().ok_or(EngineError::NoActiveDrag)?;
        let from = drag.from();
        let count = drag.cards().len();

        let accepted = target.filter(|&to| {
            to != from
                && self
                    .state
                    .column(to)
                    .zip(drag.lead())
                    .is_some_and(|(column, lead)| can_drop(lead, column))
        });

        let Some(to) = accepted else {
            self.state.tableau_mut()[from].extend(drag.into_cards());
            log::debug!("returned {count} card(s) to column {from}");
            return Ok(vec![GameEvent::Returned { column: from, count }]);
        };

        let start = self.state.tableau()[from].len();
        let completed_before = self.state.completed_count();
        let outcome = spider::place_run(&mut self.state, drag.into_cards(), from, to);
        self.state.record(Move::run(from, start, to), outcome.completed.len());
        log::debug!("dropped {count} card(s) from column {from} onto {to}");

        let mut events = vec![GameEvent::Dropped { from, to, count }];
        self.push_outcome(&mut events, &outcome, completed_before);
        Ok(events)
    }

    /// Deal a row from the stock.
    ///
    /// Refused while a drag is active, after the win, while any column is
    /// empty, or when the stock is exhausted.
    pub fn deal(&mut self) -> Result<Vec<GameEvent>> {
        spider::ensure_idle(&self.state)?;
        spider::check_deal(&self.state)?;

        let stock_before = self.state.stock_len();
        let completed_before = self.state.completed_count();
        if !deal_stock(&mut self.state) {
            return Err(EngineError::StockEmpty);
        }
        let outcome = spider::settle_after_deal(&mut self.state);
        self.state.record(Move::Deal, outcome.completed.len());
        log::debug!("dealt a row, stock now {}", self.state.stock_len());

        let mut events = vec![GameEvent::Dealt {
            count: stock_before - self.state.stock_len(),
        }];
        self.push_outcome(&mut events, &outcome, completed_before);
        Ok(events)
    }

    /// Apply a move without a pointer gesture (replays, scripted play).
    pub fn apply(&mut self, mv: &Move) -> Result<Vec<GameEvent>> {
        match *mv {
            Move::Deal => self.deal(),
            Move::Run { from, start, to } => {
                let completed_before = self.state.completed_count();
                let count = self.state.column(from).map_or(0, |c| c.len().saturating_sub(start));
                let outcome = self.rules.apply_move(&mut self.state, mv)?;
                let mut events = vec![GameEvent::Dropped { from, to, count }];
                self.push_outcome(&mut events, &outcome, completed_before);
                Ok(events)
            }
        }
    }

    fn push_outcome(&self, events: &mut Vec<GameEvent>, outcome: &MoveOutcome, completed_before: usize) {
        events.extend(
            outcome
                .completed
                .iter()
                .enumerate()
                .map(|(i, &column)| GameEvent::SequenceCompleted {
                    column,
                    slot: completed_before + i,
                }),
        );
        events.extend(outcome.flipped.iter().map(|&column| GameEvent::Flipped { column }));
        if check_win(&self.state) {
            match self.seed {
                Some(seed) => log::info!("game won (seed {seed})"),
                None => log::info!("game won"),
            }
            events.push(GameEvent::Won);
        }
    }
}
