//! Select/Edit field navigator
//!
//! In Select mode the operator moves between fields, enters Edit on the
//! current one, submits or cancels. In Edit mode one full line replaces the
//! field's value. The whole frame is redrawn after every transition.

use std::io;

use tracing::debug;

use super::keys::{read_key, Key};
use super::FormExit;
use crate::channel::TextChannel;
use crate::state::{Breadcrumb, FormMode, FormState};

const KEY_HELP: &str = "Up/Down: move  Right: edit  Enter: submit  Esc: cancel";

/// Run one navigation session over `form` until commit or abandon
pub fn run<C: TextChannel + ?Sized>(
    channel: &mut C,
    trail: &Breadcrumb,
    header: &str,
    form: &mut FormState,
) -> io::Result<FormExit> {
    form.enter_select();
    loop {
        channel.clear()?;
        channel.write(&render(trail, header, form))?;
        match form.mode() {
            FormMode::Edit => {
                let Some(line) = channel.read_line()? else {
                    debug!("input ended while editing");
                    form.enter_select();
                    return Ok(FormExit::Abandon);
                };
                debug!(field = form.active_field().name(), "field edited");
                form.finish_edit(line);
            }
            FormMode::Select => {
                if let Some(exit) = next_transition(channel, form)? {
                    debug!(?exit, "navigation finished");
                    return Ok(exit);
                }
            }
        }
    }
}

/// Read keys until one changes the form or ends the session.
/// Keys with no effect are swallowed without a redraw.
fn next_transition<C: TextChannel + ?Sized>(
    channel: &mut C,
    form: &mut FormState,
) -> io::Result<Option<FormExit>> {
    loop {
        match read_key(channel)? {
            Key::Up | Key::Char('k') => {
                if form.move_up() {
                    return Ok(None);
                }
            }
            Key::Down | Key::Char('j') => {
                if form.move_down() {
                    return Ok(None);
                }
            }
            Key::Right | Key::Char('l') => {
                form.begin_edit();
                return Ok(None);
            }
            Key::Enter => return Ok(Some(FormExit::Commit)),
            Key::Escape | Key::End => return Ok(Some(FormExit::Abandon)),
            Key::Left | Key::Char(_) | Key::Unknown => {}
        }
    }
}

/// Full frame for the current state
fn render(trail: &Breadcrumb, header: &str, form: &FormState) -> String {
    let mut frame = String::new();
    if !trail.is_empty() {
        frame.push_str(&format!("{trail}\n\n"));
    }
    frame.push_str(&format!("{header}\n\n"));
    for (index, field) in form.fields().iter().enumerate() {
        let marker = if index == form.cursor() { '>' } else { ' ' };
        frame.push_str(&format!("{marker} {}: {}\n", field.name(), field.value()));
    }
    frame.push('\n');
    frame.push_str(form.mode().label());
    frame.push('\n');

    let active = form.active_field();
    match form.mode() {
        FormMode::Select => {
            frame.push_str(KEY_HELP);
            frame.push('\n');
            frame.push_str(&format!("{}: {}\n", active.name(), active.value()));
        }
        FormMode::Edit => frame.push_str(&format!("{}: ", active.name())),
    }
    frame
}
