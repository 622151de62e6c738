pub mod filter;
pub mod insights;
pub mod projection;
pub mod sentiment;
pub mod timestamp;
pub mod types;

pub use filter::*;
pub use insights::*;
pub use projection::*;
pub use sentiment::*;
pub use types::*;
