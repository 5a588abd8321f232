pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod geometry;
pub mod interp;
pub mod motion;
pub mod pointer;
pub mod publisher;
pub mod scroll;
pub mod section;
pub mod starfield;
pub mod timeline;

pub use config::*;
pub use error::CoreError;
pub use geometry::*;
pub use interp::*;
pub use motion::*;
pub use pointer::*;
pub use publisher::*;
pub use scroll::*;
pub use section::*;
pub use timeline::*;
