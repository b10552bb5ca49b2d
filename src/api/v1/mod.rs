//! V1 API handlers.

mod files;
mod status;
mod tasks;
mod tools;

#[cfg(test)]
mod tasks_test;
#[cfg(test)]
mod tools_test;

pub use files::*;
pub use status::*;
pub use tasks::*;
pub use tools::*;
