use std::collections::HashMap;

use crate::board::BoardState;
use crate::game::Coord;
use crate::piece::{Piece, PieceArena, PieceId};

/// Movement-rule capability consumed by the engine.
///
/// The engine never decides legality itself: whatever squares a ruleset
/// returns become the piece's `available_moves` until the next regeneration.
pub trait MoveRules {
    /// Name of the ruleset, for logging
    fn name(&self) -> &str;

    /// Legal destinations for `piece` on the current board
    fn available_moves(&self, piece: &Piece, board: &BoardState, pieces: &PieceArena)
    -> Vec<Coord>;
}

/// Any piece steps one square in any direction, onto an empty square or one
/// held by the opponent.
///
/// Not a real game; useful for demos and for exercising the turn protocol.
pub struct StepRules;

impl MoveRules for StepRules {
    fn name(&self) -> &str {
        "step"
    }

    fn available_moves(
        &self,
        piece: &Piece,
        board: &BoardState,
        pieces: &PieceArena,
    ) -> Vec<Coord> {
        let from = piece.occupied_square();
        let mut moves = Vec::new();

        for df in -1..=1 {
            for dr in -1..=1 {
                if df == 0 && dr == 0 {
                    continue;
                }
                let to = from.offset(df, dr);
                if !board.is_on_board(to) {
                    continue;
                }
                let blocked = board
                    .piece_at(to)
                    .and_then(|id| pieces.get(id))
                    .is_some_and(|other| other.team() == piece.team());
                if !blocked {
                    moves.push(to);
                }
            }
        }

        moves
    }
}

/// Hands out a fixed destination list per piece, ignoring the board
#[derive(Debug, Clone, Default)]
pub struct FixedMoves {
    moves: HashMap<PieceId, Vec<Coord>>,
}

impl FixedMoves {
    pub fn new() -> Self {
        FixedMoves {
            moves: HashMap::new(),
        }
    }

    pub fn with(mut self, piece: PieceId, moves: Vec<Coord>) -> Self {
        self.moves.insert(piece, moves);
        self
    }
}

impl MoveRules for FixedMoves {
    fn name(&self) -> &str {
        "fixed"
    }

    fn available_moves(
        &self,
        piece: &Piece,
        _board: &BoardState,
        _pieces: &PieceArena,
    ) -> Vec<Coord> {
        self.moves.get(&piece.id()).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardGeometry;
    use crate::game::Team;
    use crate::piece::PieceKind;

    fn setup(placements: &[(Coord, Team)]) -> (BoardState, PieceArena) {
        let mut board = BoardState::new(BoardGeometry::default());
        let mut arena = PieceArena::new();
        for &(coord, team) in placements {
            let id = arena.spawn(PieceKind::King, team, coord);
            board.place_piece(coord, id);
        }
        (board, arena)
    }

    #[test]
    fn test_step_rules_in_open_board() {
        let (board, arena) = setup(&[(Coord::new(3, 3), Team::White)]);
        let piece = arena.get(PieceId(0)).unwrap();
        let moves = StepRules.available_moves(piece, &board, &arena);
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&Coord::new(2, 2)));
        assert!(moves.contains(&Coord::new(4, 4)));
    }

    #[test]
    fn test_step_rules_clipped_at_corner() {
        let (board, arena) = setup(&[(Coord::new(0, 0), Team::White)]);
        let piece = arena.get(PieceId(0)).unwrap();
        let moves = StepRules.available_moves(piece, &board, &arena);
        assert_eq!(moves.len(), 3);
        assert!(moves.iter().all(|&c| board.is_on_board(c)));
    }

    #[test]
    fn test_step_rules_blocked_by_own_team_only() {
        let (board, arena) = setup(&[
            (Coord::new(3, 3), Team::White),
            (Coord::new(3, 4), Team::White),
            (Coord::new(4, 4), Team::Black),
        ]);
        let piece = arena.get(PieceId(0)).unwrap();
        let moves = StepRules.available_moves(piece, &board, &arena);
        assert!(!moves.contains(&Coord::new(3, 4)));
        assert!(moves.contains(&Coord::new(4, 4)));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn test_fixed_moves_unknown_piece_has_none() {
        let (board, arena) = setup(&[(Coord::new(3, 1), Team::White)]);
        let piece = arena.get(PieceId(0)).unwrap();
        assert!(FixedMoves::new().available_moves(piece, &board, &arena).is_empty());

        let rules = FixedMoves::new().with(PieceId(0), vec![Coord::new(3, 2)]);
        assert_eq!(
            rules.available_moves(piece, &board, &arena),
            vec![Coord::new(3, 2)]
        );
    }
}
