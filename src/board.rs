use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::game::{
    Coord, DEFAULT_BOARD_SIZE, GameError, MAX_BOARD_SIZE, MoveRecord, WorldPosition,
};
use crate::piece::{PieceArena, PieceId};
use crate::turn::TurnGate;

/// Physical layout of the board in its local plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardGeometry {
    pub board_size: usize,
    pub square_size: f32,
    /// Centre of the board; input positions are measured from here
    pub origin: WorldPosition,
}

impl BoardGeometry {
    /// A board of `board_size` squares per side centred on the origin
    pub fn new(board_size: usize, square_size: f32) -> Self {
        BoardGeometry {
            board_size,
            square_size,
            origin: WorldPosition::new(0.0, 0.0),
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(self.board_size));
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(GameError::InvalidSquareSize(self.square_size));
        }
        Ok(())
    }

    /// Floor-divides a position into the grid. The result may be off the board.
    ///
    /// The origin sits on the corner of square `board_size / 2`, so on odd
    /// sizes the grid is offset by half a square towards positive axes.
    pub fn coord_from_world(&self, position: WorldPosition) -> Coord {
        let half = (self.board_size / 2) as i32;
        let file = ((position.x - self.origin.x) / self.square_size).floor() as i32;
        let rank = ((position.y - self.origin.y) / self.square_size).floor() as i32;
        Coord::new(file.saturating_add(half), rank.saturating_add(half))
    }

    /// Centre of the given square
    pub fn world_from_coord(&self, coord: Coord) -> WorldPosition {
        let half = (self.board_size / 2) as f32;
        WorldPosition::new(
            self.origin.x + (coord.file as f32 - half + 0.5) * self.square_size,
            self.origin.y + (coord.rank as f32 - half + 0.5) * self.square_size,
        )
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        BoardGeometry::new(DEFAULT_BOARD_SIZE, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        piece: PieceId,
        /// Destinations cached when the piece was picked up
        destinations: Vec<Coord>,
    },
}

impl Selection {
    pub fn piece(&self) -> Option<PieceId> {
        match self {
            Selection::Idle => None,
            Selection::Selected { piece, .. } => Some(*piece),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// What a single input did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing selectable there and nothing selected
    Ignored,
    Selected(PieceId),
    Reselected { from: PieceId, to: PieceId },
    Deselected(PieceId),
    /// The selected piece cannot go there; the selection stays
    Rejected(PieceId, Coord),
    Committed(MoveRecord),
}

/// Receives the destination preview of the current selection
pub trait SelectionPresenter {
    /// Each destination's centre and whether that square is free
    fn show_selection(&mut self, squares: &[(WorldPosition, bool)]);

    fn clear_selection(&mut self);
}

pub struct NullPresenter;

impl SelectionPresenter for NullPresenter {
    fn show_selection(&mut self, _squares: &[(WorldPosition, bool)]) {}

    fn clear_selection(&mut self) {}
}

/// Square occupancy plus the select/preview/move protocol.
///
/// The grid is the only record of which piece stands where.
#[derive(Debug, Clone)]
pub struct BoardState {
    geometry: BoardGeometry,
    grid: Vec<Option<PieceId>>,
    selection: Selection,
}

impl BoardState {
    pub fn new(geometry: BoardGeometry) -> Self {
        let size = geometry.board_size;
        BoardState {
            geometry,
            grid: vec![None; size * size],
            selection: Selection::Idle,
        }
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn board_size(&self) -> usize {
        self.geometry.board_size
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn coord_from_world(&self, position: WorldPosition) -> Coord {
        self.geometry.coord_from_world(position)
    }

    pub fn world_from_coord(&self, coord: Coord) -> WorldPosition {
        self.geometry.world_from_coord(coord)
    }

    pub fn is_on_board(&self, coord: Coord) -> bool {
        let size = self.geometry.board_size as i64;
        (0..size).contains(&(coord.file as i64)) && (0..size).contains(&(coord.rank as i64))
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.is_on_board(coord) {
            Some(coord.rank as usize * self.geometry.board_size + coord.file as usize)
        } else {
            None
        }
    }

    pub fn piece_at(&self, coord: Coord) -> Option<PieceId> {
        self.index(coord).and_then(|i| self.grid[i])
    }

    /// Writes `piece` at `coord`; off-board coordinates are ignored.
    pub fn place_piece(&mut self, coord: Coord, piece: PieceId) {
        if let Some(i) = self.index(coord) {
            self.grid[i] = Some(piece);
        }
    }

    /// Linear scan over every square, O(board_size²).
    pub fn has_piece(&self, piece: PieceId) -> bool {
        self.grid.iter().any(|&square| square == Some(piece))
    }

    /// Occupied squares in rank-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PieceId)> + '_ {
        let size = self.geometry.board_size;
        self.grid.iter().enumerate().filter_map(move |(i, square)| {
            square.map(|id| (Coord::new((i % size) as i32, (i / size) as i32), id))
        })
    }

    /// Process one input event to completion.
    ///
    /// Clicking the selected piece always deselects; clicking another piece of
    /// the side to move always reselects; only then is a move attempted. A
    /// commit ends the turn through `turns` before returning.
    pub fn handle_input_at(
        &mut self,
        position: WorldPosition,
        pieces: &mut PieceArena,
        turns: &mut dyn TurnGate,
    ) -> InputOutcome {
        let coord = self.coord_from_world(position);
        let target = self.piece_at(coord);
        let selectable = target.filter(|&id| {
            pieces
                .get(id)
                .is_some_and(|piece| turns.is_turn_of(piece.team()))
        });

        let outcome = match self.selection.piece() {
            None => match selectable {
                Some(id) => {
                    self.select(id, pieces);
                    InputOutcome::Selected(id)
                }
                None => InputOutcome::Ignored,
            },
            Some(current) if target == Some(current) => {
                self.selection = Selection::Idle;
                InputOutcome::Deselected(current)
            }
            Some(current) => match selectable {
                Some(id) => {
                    self.select(id, pieces);
                    InputOutcome::Reselected {
                        from: current,
                        to: id,
                    }
                }
                None => {
                    let reachable = self.is_on_board(coord)
                        && pieces
                            .get(current)
                            .is_some_and(|piece| piece.can_move_to(coord));
                    if reachable {
                        let record = self.commit(current, coord, pieces);
                        info!("Committed {}", record);
                        turns.end_turn(self, pieces);
                        InputOutcome::Committed(record)
                    } else {
                        InputOutcome::Rejected(current, coord)
                    }
                }
            },
        };

        debug!("Input at {} -> {}: {:?}", position, coord, outcome);
        outcome
    }

    fn select(&mut self, piece: PieceId, pieces: &PieceArena) {
        let destinations = pieces
            .get(piece)
            .map(|p| p.available_moves().to_vec())
            .unwrap_or_default();
        self.selection = Selection::Selected {
            piece,
            destinations,
        };
    }

    fn commit(&mut self, piece: PieceId, to: Coord, pieces: &mut PieceArena) -> MoveRecord {
        let from = pieces
            .get(piece)
            .map(|p| p.occupied_square())
            .unwrap_or(to);
        let (Some(from_index), Some(to_index)) = (self.index(from), self.index(to)) else {
            panic!("Piece {} moving {} -> {} leaves the board", piece, from, to);
        };
        assert_eq!(
            self.grid[from_index],
            Some(piece),
            "Board and piece {} disagree about square {}",
            piece,
            from
        );

        let captured = self.grid[to_index];
        self.grid[from_index] = None;
        self.grid[to_index] = Some(piece);
        if let Some(p) = pieces.get_mut(piece) {
            p.move_to(to);
        }
        self.selection = Selection::Idle;

        MoveRecord {
            piece,
            from,
            to,
            captured,
        }
    }

    /// Centre of every cached destination and whether it is free
    pub fn selection_preview(&self) -> Vec<(WorldPosition, bool)> {
        match &self.selection {
            Selection::Idle => Vec::new(),
            Selection::Selected { destinations, .. } => destinations
                .iter()
                .map(|&coord| (self.world_from_coord(coord), self.piece_at(coord).is_none()))
                .collect(),
        }
    }

    /// Get a string representation of the board, highest rank first
    pub fn display_board(&self, pieces: &PieceArena) -> String {
        let size = self.geometry.board_size;
        let destinations: &[Coord] = match &self.selection {
            Selection::Idle => &[],
            Selection::Selected { destinations, .. } => destinations,
        };

        let mut result = String::new();
        for rank in (0..size).rev() {
            result.push_str(&format!("{:2} ", rank));
            for file in 0..size {
                let coord = Coord::new(file as i32, rank as i32);
                let c = match self.piece_at(coord).and_then(|id| pieces.get(id)) {
                    Some(piece) => piece.kind().symbol(piece.team()),
                    None if destinations.contains(&coord) => '*',
                    None => '.',
                };
                result.push_str(&format!(" {} ", c));
            }
            result.push('\n');
        }
        result.push_str("   ");
        for file in 0..size {
            result.push_str(&format!("{:2} ", file));
        }
        result.push('\n');

        result
    }
}
