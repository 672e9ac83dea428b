mod path;
mod query;
mod types;

pub use path::*;
pub use query::*;
pub use types::*;
