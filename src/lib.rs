pub mod board;
pub mod game;
pub mod layout;
pub mod piece;
pub mod rules;
pub mod session;
pub mod turn;

pub use board::*;
pub use game::*;
pub use layout::*;
pub use piece::*;
pub use rules::*;
pub use session::*;
pub use turn::*;
