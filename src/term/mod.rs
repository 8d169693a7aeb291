//! Terminal glue: session lifecycle and the snapshot view.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalSession;
