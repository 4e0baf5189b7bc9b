mod contact;
mod service;
mod site;

pub use contact::*;
pub use service::*;
pub use site::*;
