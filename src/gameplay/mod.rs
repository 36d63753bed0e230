pub mod action;
pub use action::*;

pub mod engine;
pub use engine::*;

pub mod hand;
pub use hand::*;

pub mod player;
pub use player::*;

pub mod show;

pub mod value;
pub use value::*;
