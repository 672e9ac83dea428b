pub mod cli;
pub mod conf;
pub mod ctx;
pub mod device;
pub mod logging;
pub mod normalize;
mod proxy;
pub mod server;
