use log::info;

use crate::board::BoardState;
use crate::game::Team;
use crate::piece::{PieceArena, PieceId, Side};
use crate::rules::MoveRules;

/// What the board needs from whoever owns the turn order
pub trait TurnGate {
    /// Whether pieces of `team` may be selected right now
    fn is_turn_of(&self, team: Team) -> bool;

    /// Called once after every committed move, with the board already updated
    fn end_turn(&mut self, board: &BoardState, pieces: &mut PieceArena);
}

/// Tracks the side to move and regenerates move sets after every move.
pub struct TurnController {
    active: Team,
    sides: [Side; 2],
    rules: Box<dyn MoveRules>,
    turn_number: usize,
}

impl TurnController {
    pub fn new(first: Team, rules: Box<dyn MoveRules>) -> Self {
        TurnController {
            active: first,
            sides: [Side::new(Team::White), Side::new(Team::Black)],
            rules,
            turn_number: 0,
        }
    }

    pub fn active_team(&self) -> Team {
        self.active
    }

    /// Number of completed turns
    pub fn turn_number(&self) -> usize {
        self.turn_number
    }

    pub fn rules(&self) -> &dyn MoveRules {
        self.rules.as_ref()
    }

    pub fn side(&self, team: Team) -> &Side {
        &self.sides[team.index()]
    }

    pub fn add_piece(&mut self, team: Team, piece: PieceId) {
        self.sides[team.index()].add_piece(piece);
    }

    /// Generates the first side's moves so the opening selection has
    /// something to preview.
    pub fn start(&mut self, board: &BoardState, pieces: &mut PieceArena) {
        info!(
            "Starting with {} to move ({} rules)",
            self.active,
            self.rules.name()
        );
        self.regenerate(self.active, board, pieces);
    }

    pub fn regenerate(&self, team: Team, board: &BoardState, pieces: &mut PieceArena) {
        self.side(team)
            .generate_all_possible_moves(board, pieces, self.rules.as_ref());
    }
}

impl TurnGate for TurnController {
    fn is_turn_of(&self, team: Team) -> bool {
        self.active == team
    }

    fn end_turn(&mut self, board: &BoardState, pieces: &mut PieceArena) {
        // Both move sets must be fresh before the side to move changes.
        self.regenerate(self.active, board, pieces);
        self.regenerate(self.active.opponent(), board, pieces);
        self.active = self.active.opponent();
        self.turn_number += 1;
        info!("Turn {}: {} to move", self.turn_number, self.active);
    }
}
