//! UI utilities for terminal output
//!
//! Spinners and progress bars are best-effort decoration; they are never
//! created in quiet mode.

mod progress;
mod spinner;

pub use progress::{create_progress_bar, finish_progress};
pub use spinner::{clear_spinner, create_spinner, finish_spinner};
