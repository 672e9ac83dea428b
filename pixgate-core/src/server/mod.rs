mod runtime;
mod setup;

pub use runtime::{OriginRuntime, RuntimeState, build_runtime_state};
pub use setup::run;
