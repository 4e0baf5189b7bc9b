//! Contact form controller: field validity styling and the submit state
//! machine that talks to `POST /api/contact`.

mod controller;
mod field;
mod transport;

pub use controller::*;
pub use field::*;
pub use transport::*;
