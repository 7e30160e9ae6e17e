mod activities;
mod productions;

pub use activities::*;
pub use productions::*;
