pub mod card;
pub use card::*;

pub mod context;
pub use context::*;

pub mod deck;
pub use deck::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
