//! Form domain layer
//!
//! Ordered fields with a cursor and a Select/Edit mode. Drivers in
//! [`crate::form`] turn keystrokes into the transitions defined here.

mod field;
mod form_state;

pub use form_state::{FormMode, FormState};
