/// Output formatting layer: capability traits, JSON and table formatters, dispatch.
pub mod contracts;
pub mod dispatch;
pub mod errors;
pub mod json;
pub mod table;

pub use contracts::{DisplaysData, FormatsAsJson};
pub use dispatch::handle;
pub use errors::DisplayError;
