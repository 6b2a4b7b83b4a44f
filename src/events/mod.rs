pub mod listener;
pub mod pointer;
pub mod theme;

pub use listener::Listener;
pub use pointer::{wire_input_handlers, InputWiring};
pub use theme::ThemeObserver;
