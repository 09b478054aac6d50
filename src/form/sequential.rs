//! Line-by-line form driver
//!
//! Prompts each field in order (`Name: `, `Password: `) and commits once the
//! last one is answered. Suits pipes and dumb terminals where cursor keys
//! are not available.

use std::io;

use tracing::debug;

use super::FormExit;
use crate::channel::TextChannel;
use crate::state::FormState;

pub fn run<C: TextChannel + ?Sized>(channel: &mut C, form: &mut FormState) -> io::Result<FormExit> {
    form.enter_select();
    for index in 0..form.fields().len() {
        form.focus(index);
        channel.write(&format!("{}: ", form.active_field().label()))?;
        form.begin_edit();
        let Some(line) = channel.read_line()? else {
            debug!(field = form.active_field().name(), "input ended before form was complete");
            form.enter_select();
            return Ok(FormExit::Abandon);
        };
        form.finish_edit(line);
    }
    Ok(FormExit::Commit)
}
