//! One-suit Spider rules.
//!
//! The free functions are the engine contract used by presentation code:
//! `init_game`, `can_drag`, `can_drop`, `check_complete`, `deal_stock` and
//! `check_win`. They are total over well-formed input and never fail; an
//! out-of-range index simply makes a check return false.
//!
//! `SpiderRules` builds validated moves on top of them and keeps the
//! follow-up bookkeeping in one place: after cards land on a column, every
//! completed sequence is removed and the new top is turned face-up.

use crate::cards::{create_deck, Card, CompletedSequence, Rank, DECK_COPIES, RANK_COUNT};
use crate::core::action::Move;
use crate::core::error::{EngineError, Result};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::tableau::{CarriedRun, Column, Tableau, COLUMN_COUNT, INITIAL_COLUMN_SIZES};

use super::engine::{GameResult, RulesEngine};

/// Deal a new game: shuffle a deck, lay out the tableau, and keep the rest
/// as stock.
///
/// Columns 0-3 get six cards and columns 4-9 five, popped from the end of
/// the deck; only the last card of each column is face-up. The remaining
/// 50 cards become the stock.
#[must_use]
pub fn init_game(rng: &mut GameRng) -> GameState {
    let mut deck = create_deck(rng);
    let mut tableau = Tableau::new();

    for (index, &count) in INITIAL_COLUMN_SIZES.iter().enumerate() {
        let column = &mut tableau[index];
        for row in 0..count {
            let Some(mut card) = deck.pop() else { break };
            card.face_up = row == count - 1;
            column.push(card);
        }
    }

    log::info!("new game dealt (seed {}, stock {})", rng.seed(), deck.len());
    GameState::from_parts(tableau, deck)
}

/// Whether the cards from `index` to the top of `column` form a draggable
/// run: all face-up, each one rank below the card beneath it.
#[must_use]
pub fn can_drag(column: &[Card], index: usize) -> bool {
    let Some(first) = column.get(index) else {
        return false;
    };
    if !first.face_up {
        return false;
    }
    column[index..]
        .windows(2)
        .all(|pair| pair[1].face_up && pair[0].rank().is_one_above(pair[1].rank()))
}

/// Whether `card` (the lead card of a run) may be placed on `target`.
///
/// Empty columns take anything; otherwise the target's top must be exactly
/// one rank higher. Suits never matter.
#[must_use]
pub fn can_drop(card: &Card, target: &[Card]) -> bool {
    target
        .last()
        .map_or(true, |top| top.rank().is_one_above(card.rank()))
}

/// Remove a completed King-to-Ace sequence from the top of `column`.
///
/// Reading from the top card backward, the last 13 cards must be A, 2, ...,
/// K. On a match they are split off (King first) and returned; otherwise the
/// column is left untouched. Removes at most one sequence per call.
pub fn check_complete(column: &mut Column) -> Option<CompletedSequence> {
    let start = column.len().checked_sub(RANK_COUNT)?;
    let complete = column[start..]
        .iter()
        .rev()
        .zip(Rank::ALL)
        .all(|(card, rank)| card.rank() == rank);
    if !complete {
        return None;
    }
    Some(CompletedSequence::new(column.split_off(start)))
}

/// Deal one card face-up from the stock onto each column, left to right.
///
/// Returns false (and changes nothing) when the stock is empty. The
/// no-empty-column rule is the caller's to enforce; see
/// [`SpiderRules::apply_move`].
pub fn deal_stock(state: &mut GameState) -> bool {
    let (tableau, stock) = state.tableau_and_stock_mut();
    if stock.is_empty() {
        return false;
    }
    for column in tableau.iter_mut() {
        let Some(mut card) = stock.pop() else { break };
        card.face_up = true;
        column.push(card);
    }
    true
}

/// All eight sequences completed and nothing left to deal.
#[must_use]
pub fn check_win(state: &GameState) -> bool {
    state.completed_count() == DECK_COPIES && state.stock().is_empty()
}

/// What cleaning up a single column did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Sequences removed, in removal order.
    pub completed: Vec<CompletedSequence>,
    /// Whether the new top card was turned face-up.
    pub flipped: bool,
}

/// Remove every completed sequence from the top of `column`, then turn the
/// exposed top card face-up.
pub fn resolve_column(column: &mut Column) -> Resolution {
    let mut completed = Vec::new();
    while let Some(sequence) = check_complete(column) {
        completed.push(sequence);
    }
    let flipped = column.flip_top();
    Resolution { completed, flipped }
}

/// Side effects of a move beyond the cards it moved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Column index of each completed sequence, in completion order.
    pub completed: Vec<usize>,
    /// Columns whose top card was turned face-up.
    pub flipped: Vec<usize>,
}

/// Resolve column `index` and move its completed sequences into the state.
fn settle_column(state: &mut GameState, index: usize, outcome: &mut MoveOutcome) {
    let resolution = resolve_column(&mut state.tableau_mut()[index]);
    for sequence in resolution.completed {
        log::debug!("sequence completed in column {index}");
        state.push_completed(sequence);
        outcome.completed.push(index);
    }
    if resolution.flipped {
        log::trace!("flipped top of column {index}");
        outcome.flipped.push(index);
    }
}

/// Land a carried run on `to` and settle both the target and the source.
///
/// Legality is the caller's responsibility.
pub(crate) fn place_run(state: &mut GameState, run: CarriedRun, from: usize, to: usize) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    state.tableau_mut()[to].extend(run);
    settle_column(state, to, &mut outcome);
    if state.tableau_mut()[from].flip_top() {
        log::trace!("flipped top of column {from}");
        outcome.flipped.push(from);
    }
    outcome
}

/// Settle all ten columns after a deal.
pub(crate) fn settle_after_deal(state: &mut GameState) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    for index in 0..COLUMN_COUNT {
        settle_column(state, index, &mut outcome);
    }
    outcome
}

/// Reject input while a drag is in flight or the game is won.
pub(crate) fn ensure_idle(state: &GameState) -> Result<()> {
    if state.drag().is_some() {
        return Err(EngineError::DragInProgress);
    }
    if check_win(state) {
        return Err(EngineError::GameOver);
    }
    Ok(())
}

/// Column at `index` or a range error.
pub(crate) fn column_at(state: &GameState, index: usize) -> Result<&Column> {
    state.column(index).ok_or(EngineError::ColumnOutOfRange {
        column: index,
        len: COLUMN_COUNT,
    })
}

/// Validate that the run at `column[index..]` may be picked up.
pub(crate) fn check_drag(state: &GameState, column: usize, index: usize) -> Result<()> {
    let pile = column_at(state, column)?;
    if index >= pile.len() {
        return Err(EngineError::IndexOutOfRange {
            column,
            index,
            len: pile.len(),
        });
    }
    if !can_drag(pile, index) {
        return Err(EngineError::NotDraggable { column, index });
    }
    Ok(())
}

/// Validate the deal preconditions: no empty column, stock not empty.
pub(crate) fn check_deal(state: &GameState) -> Result<()> {
    if let Some(column) = state.tableau().first_empty() {
        return Err(EngineError::EmptyColumn { column });
    }
    if state.stock().is_empty() {
        return Err(EngineError::StockEmpty);
    }
    Ok(())
}

/// Columns other than `from` that accept `lead`.
#[must_use]
pub fn valid_drops(tableau: &Tableau, lead: &Card, from: usize) -> Vec<usize> {
    tableau
        .iter()
        .enumerate()
        .filter(|&(index, column)| index != from && can_drop(lead, column))
        .map(|(index, _)| index)
        .collect()
}

/// One-suit Spider.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpiderRules;

impl SpiderRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RulesEngine for SpiderRules {
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        let mut moves = Vec::new();
        if state.drag().is_some() || check_win(state) {
            return moves;
        }

        let tableau = state.tableau();
        for (from, column) in tableau.iter().enumerate() {
            let Some(run_start) = column.run_start() else {
                continue;
            };
            for start in run_start..column.len() {
                for to in valid_drops(tableau, &column[start], from) {
                    moves.push(Move::run(from, start, to));
                }
            }
        }

        if check_deal(state).is_ok() {
            moves.push(Move::Deal);
        }
        moves
    }

    fn apply_move(&self, state: &mut GameState, mv: &Move) -> Result<MoveOutcome> {
        ensure_idle(state)?;

        let outcome = match *mv {
            Move::Deal => {
                check_deal(state)?;
                deal_stock(state);
                log::debug!("dealt a row, stock now {}", state.stock_len());
                settle_after_deal(state)
            }
            Move::Run { from, start, to } => {
                check_drag(state, from, start)?;
                let target = column_at(state, to)?;
                let lead = &state.tableau()[from][start];
                if from == to || !can_drop(lead, target) {
                    return Err(EngineError::IllegalDrop { from, to });
                }
                let run: CarriedRun = state.tableau_mut()[from].split_off(start).into_iter().collect();
                log::debug!("moved {} card(s) from column {from} to {to}", run.len());
                place_run(state, run, from, to)
            }
        };

        state.record(*mv, outcome.completed.len());
        Ok(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if check_win(state) {
            Some(GameResult::Won)
        } else if state.drag().is_none() && self.legal_moves(state).is_empty() {
            Some(GameResult::Stalled)
        } else {
            None
        }
    }
}
