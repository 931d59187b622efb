mod de;
pub mod panic;
mod signal;

pub use de::*;
pub use signal::*;
