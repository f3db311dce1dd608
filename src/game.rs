//! Turn driver for one human-versus-opponent game.

use alloc::vec::Vec;

use log::{debug, info};

use crate::{
    board::Board,
    choice::Chooser,
    common::{BoardError, Coordinate, GameError, HitOutcome, PlacementIssue},
    config::{default_ship_count, fleet_sizes},
    targeting::Targeter,
};

/// Current status of a game, seen from the human side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Turn state for one human-versus-opponent game: both boards and the
/// opponent's targeting memory. Pure logic; callers render and prompt.
#[derive(Debug)]
pub struct GameEngine {
    player_board: Board,
    opponent_board: Board,
    targeter: Targeter,
}

impl GameEngine {
    /// Two empty boards of side `size`, each meant for `min(size, MAX_SHIP_SIZE)` warships.
    pub fn new(size: usize) -> Result<Self, GameError> {
        let count = default_ship_count(size);
        let player_board = Board::new(size, count)?;
        let opponent_board = Board::new(size, count)?;
        let targeter = Targeter::with_fleet(size, &fleet_sizes(size, count))?;
        Ok(Self {
            player_board,
            opponent_board,
            targeter,
        })
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// Size of the next human warship to place by hand, largest first, or
    /// `None` once the fleet is complete.
    pub fn next_player_warship_size(&self) -> Option<usize> {
        let board = &self.player_board;
        fleet_sizes(board.size(), board.num_warships())
            .get(board.warships().len())
            .copied()
    }

    /// Runs the next human warship may occupy.
    pub fn player_placement_options(&self) -> Vec<Vec<Coordinate>> {
        match self.next_player_warship_size() {
            Some(size) => self.player_board.placement_options(size),
            None => Vec::new(),
        }
    }

    /// Place the next human warship by hand. It must have the size
    /// [`GameEngine::next_player_warship_size`] asks for and lie on one of
    /// [`GameEngine::player_placement_options`].
    pub fn place_player_warship(&mut self, blocks: Vec<Coordinate>) -> Result<(), BoardError> {
        let expected = self
            .next_player_warship_size()
            .ok_or(BoardError::FleetComplete)?;
        if blocks.len() != expected {
            debug!("expected a {} mast warship, got {} blocks", expected, blocks.len());
            return Err(BoardError::InvalidPlacement {
                blocks,
                issue: PlacementIssue::WrongSize { expected },
            });
        }
        self.player_board.add_warship(blocks)
    }

    /// The opponent's board. Only its hit log and fleet summary are meant
    /// to be shown to the human.
    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    pub fn targeter(&self) -> &Targeter {
        &self.targeter
    }

    /// Draw the opponent's fleet at random.
    pub fn place_opponent_fleet<C: Chooser + ?Sized>(&mut self, chooser: &mut C) -> Result<(), BoardError> {
        self.opponent_board.auto_place_fleet(chooser)
    }

    /// Draw the human fleet at random instead of placing it by hand.
    pub fn place_player_fleet<C: Chooser + ?Sized>(&mut self, chooser: &mut C) -> Result<(), BoardError> {
        self.player_board.auto_place_fleet(chooser)
    }

    /// Resolve the human's shot against the opponent's board.
    pub fn player_shot(&mut self, coordinate: Coordinate) -> Result<HitOutcome, BoardError> {
        let outcome = self.opponent_board.hit(coordinate)?;
        info!("player shot {}: {}", coordinate, outcome);
        Ok(outcome)
    }

    /// Let the opponent pick a coordinate, resolve it against the human's
    /// board, and feed the outcome back into its memory.
    pub fn opponent_turn<C: Chooser + ?Sized>(
        &mut self,
        chooser: &mut C,
    ) -> Result<(Coordinate, HitOutcome), GameError> {
        let guess = self.targeter.next_guess(chooser)?;
        let outcome = self.player_board.hit(guess)?;
        self.targeter.feedback(outcome, chooser)?;
        info!("opponent shot {}: {}", guess, outcome);
        Ok((guess, outcome))
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.opponent_board.all_sunk() {
            GameStatus::Won
        } else if self.player_board.all_sunk() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
