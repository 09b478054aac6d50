//! Interactive form engine
//!
//! [`get_form_input`] builds a fresh [`FormState`], lets the operator fill it
//! through the configured driver, hands the values to a processing function
//! and wraps the whole thing in [`try_until_valid`].

mod keys;
mod navigator;
mod retry;
mod sequential;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::channel::TextChannel;
use crate::error::Result;
use crate::state::{Breadcrumb, FormState, Outcome};

pub use retry::{try_until_valid, AbandonPolicy};

/// How a single form session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormExit {
    Commit,
    Abandon,
}

/// Which driver collects the field values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStyle {
    /// Cursor-key navigation between fields with a Select/Edit mode
    #[default]
    Navigator,
    /// One line prompt per field, in order
    Sequential,
}

impl FormStyle {
    fn run<C: TextChannel + ?Sized>(
        self,
        channel: &mut C,
        trail: &Breadcrumb,
        header: &str,
        form: &mut FormState,
    ) -> std::io::Result<FormExit> {
        match self {
            FormStyle::Navigator => navigator::run(channel, trail, header, form),
            FormStyle::Sequential => sequential::run(channel, form),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormOptions {
    pub style: FormStyle,
    pub on_abandon: AbandonPolicy,
}

/// Ask for `field_names` until `process` accepts the values or the operator
/// gives up.
///
/// The navigator shows `trail` above `prompt` on every redraw.
///
/// Field names are trimmed, blank ones dropped and duplicates removed. Values
/// typed in one attempt are still there in the next. A form left with no
/// fields is rejected with [`SigninError::EmptyForm`](crate::error::SigninError)
/// before anything is written.
pub fn get_form_input<C, T, F>(
    channel: &mut C,
    options: FormOptions,
    trail: &Breadcrumb,
    prompt: &str,
    field_names: &[&str],
    mut process: F,
) -> Result<Option<T>>
where
    C: TextChannel + ?Sized,
    F: FnMut(&HashMap<String, String>) -> Result<Outcome<T>>,
{
    let mut form = FormState::new(field_names)?;
    tracing::debug!(fields = form.fields().len(), style = ?options.style, "form opened");

    try_until_valid(channel, options.on_abandon, |channel| {
        match options.style.run(channel, trail, prompt, &mut form)? {
            FormExit::Abandon => Ok(Outcome::Failure(None)),
            FormExit::Commit => process(&form.values()),
        }
    })
}
