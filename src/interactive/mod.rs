//! Interactive TUI mode
//!
//! Full-screen front end over a solving session: the suggestion, remaining
//! candidates, coloured history and known constraints stay on screen while
//! feedback is typed in.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
