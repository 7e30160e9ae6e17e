mod activity_store;
#[cfg(test)]
pub mod mock;
mod production_store;

pub use activity_store::*;
pub use production_store::*;
