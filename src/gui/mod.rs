mod app;
mod canvas;
mod message;
mod screens;
mod state;

pub use app::App;
pub use message::Message;
pub use state::AppState;
