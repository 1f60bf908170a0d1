use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::BoardState;
use crate::game::{Coord, Team};
use crate::rules::MoveRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Single-letter symbol, uppercase for White
    pub fn symbol(&self, team: Team) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match team {
            Team::White => c.to_ascii_uppercase(),
            Team::Black => c,
        }
    }
}

/// Stable index of a piece inside its `PieceArena`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub usize);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    team: Team,
    square: Coord,
    available_moves: Vec<Coord>,
    has_moved: bool,
}

impl Piece {
    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn occupied_square(&self) -> Coord {
        self.square
    }

    /// Legal destinations as of the last regeneration
    pub fn available_moves(&self) -> &[Coord] {
        &self.available_moves
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn can_move_to(&self, coord: Coord) -> bool {
        self.available_moves.contains(&coord)
    }

    pub fn move_to(&mut self, coord: Coord) {
        self.square = coord;
        self.has_moved = true;
    }

    pub fn set_available_moves(&mut self, moves: Vec<Coord>) {
        self.available_moves = moves;
    }
}

/// Owns every piece entity of a game; the grid refers to them by `PieceId`.
#[derive(Debug, Clone, Default)]
pub struct PieceArena {
    pieces: Vec<Piece>,
}

impl PieceArena {
    pub fn new() -> Self {
        PieceArena { pieces: Vec::new() }
    }

    pub fn spawn(&mut self, kind: PieceKind, team: Team, square: Coord) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece {
            id,
            kind,
            team,
            square,
            available_moves: Vec::new(),
            has_moved: false,
        });
        id
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }
}

/// All pieces fielded by one team
#[derive(Debug, Clone)]
pub struct Side {
    team: Team,
    pieces: Vec<PieceId>,
}

impl Side {
    pub fn new(team: Team) -> Self {
        Side {
            team,
            pieces: Vec::new(),
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    pub fn add_piece(&mut self, id: PieceId) {
        if !self.pieces.contains(&id) {
            self.pieces.push(id);
        }
    }

    /// Recompute `available_moves` for every owned piece against the current
    /// occupancy. Pieces that are no longer on the board end up with no moves.
    pub fn generate_all_possible_moves(
        &self,
        board: &BoardState,
        arena: &mut PieceArena,
        rules: &dyn MoveRules,
    ) {
        // Every piece sees the same snapshot of the arena.
        let snapshot: &PieceArena = arena;
        let regenerated: Vec<(PieceId, Vec<Coord>)> = self
            .pieces
            .iter()
            .filter_map(|&id| {
                let piece = snapshot.get(id)?;
                let moves = if board.has_piece(id) {
                    rules.available_moves(piece, board, snapshot)
                } else {
                    Vec::new()
                };
                Some((id, moves))
            })
            .collect();

        for (id, moves) in regenerated {
            if let Some(piece) = arena.get_mut(id) {
                piece.set_available_moves(moves);
            }
        }
    }
}
