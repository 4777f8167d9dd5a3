mod app_state;
mod errors;
mod message;
mod request;

pub use app_state::*;
pub use errors::*;
pub use message::*;
pub use request::*;
