mod activities;
mod productions;

pub use activities::ActivityServiceImpl;
pub use productions::ProductionServiceImpl;
