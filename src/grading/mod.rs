//! Grade computation.
//!
//! [`compute`] turns a raw score out of a configurable total into one final
//! grade per difficulty level of a [`ComplexityLevel`].

pub mod level;
pub mod mapper;
pub mod types;

pub use level::{ComplexityLevel, LevelSpec};
pub use mapper::compute;
pub use types::GradeResult;
