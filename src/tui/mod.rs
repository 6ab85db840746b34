//! Terminal frontend. Holds no game rules: key presses become engine calls and
//! every frame is drawn from the engine's observers.

pub mod app;
pub mod controller;
pub mod ui;
