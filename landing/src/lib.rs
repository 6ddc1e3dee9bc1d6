mod components;
mod error;
mod mount;
pub mod store;
mod utils;

pub use self::components::InteractiveCounter;
pub use self::error::{Error, Result};
pub use self::mount::mount;
