// Library root
// -----------
// This crate exposes a small library surface for the setup CLI. The
// binary (`main.rs`) uses these modules to implement the interactive
// flow.
//
// Module responsibilities:
// - `credential`: The captured API key, its destination path and the
//   atomic file persistence helpers.
// - `ui`: Implements the terminal prompt flow and delegates the actual
//   save to `credential`.
//
// Keeping this separation makes it easier to test the persistence
// logic without a terminal attached.
pub mod credential;
pub mod ui;
