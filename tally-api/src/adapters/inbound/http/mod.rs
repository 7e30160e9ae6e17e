mod csv_export;
mod requests;
mod responses;

pub use csv_export::*;
pub use requests::*;
pub use responses::*;
