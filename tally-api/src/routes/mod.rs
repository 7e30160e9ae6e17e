pub(crate) mod activities;
pub(crate) mod error;
pub(crate) mod export;
mod extract;
pub(crate) mod productions;

pub(crate) use error::ApiError;
use extract::JsonBody;
