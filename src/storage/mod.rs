//! Database operations behind the handlers. Multi-row writes run inside a
//! single transaction.

pub mod collections;
mod game;
mod user;

pub use game::*;
pub use user::*;
