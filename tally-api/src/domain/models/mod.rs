mod activity;
mod ids;
mod production;
mod progress;

pub use activity::*;
pub use ids::*;
pub use production::*;
pub use progress::*;
