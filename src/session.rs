use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::board::{BoardGeometry, BoardState, InputOutcome, NullPresenter, SelectionPresenter};
use crate::game::{Coord, GameError, MoveRecord, Team, WorldPosition};
use crate::layout::BoardLayout;
use crate::piece::{Piece, PieceArena, PieceId, PieceKind};
use crate::rules::MoveRules;
use crate::turn::TurnController;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub geometry: BoardGeometry,
    pub first_team: Team,
    pub layout: BoardLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            geometry: BoardGeometry::default(),
            first_team: Team::White,
            layout: BoardLayout::standard_chess(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.geometry.validate()?;
        self.layout.validate(self.geometry.board_size)
    }
}

/// One game: the board, its pieces and the turn order, driven by input events.
pub struct GameSession {
    board: BoardState,
    pieces: PieceArena,
    turns: TurnController,
    presenter: Box<dyn SelectionPresenter>,
    history: Vec<MoveRecord>,
}

impl GameSession {
    pub fn new(config: SessionConfig, rules: Box<dyn MoveRules>) -> Result<Self, GameError> {
        config.validate()?;

        let mut session = GameSession {
            board: BoardState::new(config.geometry),
            pieces: PieceArena::new(),
            turns: TurnController::new(config.first_team, rules),
            presenter: Box::new(NullPresenter),
            history: Vec::new(),
        };

        for placement in &config.layout.placements {
            session.spawn_piece(placement.square, placement.team, placement.kind);
        }
        session.turns.start(&session.board, &mut session.pieces);

        Ok(session)
    }

    pub fn with_presenter(mut self, presenter: Box<dyn SelectionPresenter>) -> Self {
        self.presenter = presenter;
        self
    }

    /// Creates a piece on an empty square and hands it to its side.
    ///
    /// Move sets are not regenerated; that happens at the next end of turn.
    pub fn spawn_piece(&mut self, square: Coord, team: Team, kind: PieceKind) -> Option<PieceId> {
        if !self.board.is_on_board(square) {
            warn!("Not placing {:?} {:?} off the board at {}", team, kind, square);
            return None;
        }
        if let Some(existing) = self.board.piece_at(square) {
            warn!("Not placing {:?} {:?} at {}: {} is there", team, kind, square, existing);
            return None;
        }

        let id = self.pieces.spawn(kind, team, square);
        self.board.place_piece(square, id);
        self.turns.add_piece(team, id);
        debug!("Placed {:?} {:?} {} at {}", team, kind, id, square);
        Some(id)
    }

    pub fn handle_input_at(&mut self, position: WorldPosition) -> InputOutcome {
        let outcome = self
            .board
            .handle_input_at(position, &mut self.pieces, &mut self.turns);

        match &outcome {
            InputOutcome::Selected(_) | InputOutcome::Reselected { .. } => {
                self.presenter.show_selection(&self.board.selection_preview());
            }
            InputOutcome::Deselected(_) => self.presenter.clear_selection(),
            InputOutcome::Committed(record) => {
                self.presenter.clear_selection();
                self.history.push(*record);
            }
            InputOutcome::Ignored | InputOutcome::Rejected(..) => {}
        }

        outcome
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn pieces(&self) -> &PieceArena {
        &self.pieces
    }

    pub fn turns(&self) -> &TurnController {
        &self.turns
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn piece_at(&self, square: Coord) -> Option<&Piece> {
        self.board.piece_at(square).and_then(|id| self.pieces.get(id))
    }

    pub fn active_team(&self) -> Team {
        self.turns.active_team()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn display_board(&self) -> String {
        format!(
            "[{} to move, turn {}]\n{}",
            self.active_team(),
            self.turns.turn_number() + 1,
            self.board.display_board(&self.pieces)
        )
    }
}
