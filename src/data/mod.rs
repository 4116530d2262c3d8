mod loader;

pub(crate) use loader::validate;
pub use loader::{LoadError, load_instrument, load_instrument_from_str};
