mod error;
mod inquiry;

pub use error::*;
pub use inquiry::*;
