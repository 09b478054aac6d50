//! Application state module

mod breadcrumb;
mod forms;
mod outcome;
mod user;

pub use breadcrumb::*;
pub use forms::*;
pub use outcome::*;
pub use user::*;
