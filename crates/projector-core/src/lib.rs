pub mod config;
pub mod consts;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod inspector;
pub mod io;
pub mod lens;
pub mod source;
pub mod throttle;
pub mod zoom;
