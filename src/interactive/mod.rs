//! Interactive TUI interface

mod app;
mod board;
mod rendering;

pub use app::{App, MESSAGE_TTL, Message, run_tui};
pub use board::LetterBoard;
