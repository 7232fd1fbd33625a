pub mod loader;
pub mod types;

pub use loader::{load_responses, parse_cell, read_responses, Cell};
pub use types::{LoadedResponses, MalformedCell, Response, ResponseTable};
