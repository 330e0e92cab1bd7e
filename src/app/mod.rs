//! Application-Layer: Controller, State, Events und Handler.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod render_scene;
pub mod state;

pub use crate::core::Camera2D;
pub use controller::AppController;
pub use events::AppIntent;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, ViewState};
