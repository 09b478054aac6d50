//! Sign-in flow: the name/password form checked against a credential store

use std::collections::HashMap;

use tracing::info;

use crate::channel::TextChannel;
use crate::error::Result;
use crate::form::{get_form_input, FormOptions};
use crate::state::{Breadcrumb, Outcome, User, UserRole};
use crate::store::{CredentialResult, CredentialService};

pub const SIGN_IN_HEADER: &str = "Please insert the necessary data.";

/// Breadcrumb entry for this screen
const SIGN_IN_STATE: &str = "Sign in";

const NAME: &str = "name";
const PASSWORD: &str = "password";

/// Ask for credentials until they are accepted or the operator gives up
pub fn sign_in<C, S>(channel: &mut C, service: &S, options: FormOptions) -> Result<Option<User>>
where
    C: TextChannel + ?Sized,
    S: CredentialService + ?Sized,
{
    let trail = Breadcrumb::default().child(SIGN_IN_STATE);
    get_form_input(
        channel,
        options,
        &trail,
        SIGN_IN_HEADER,
        &[NAME, PASSWORD],
        |values| authenticate(service, field(values, NAME), field(values, PASSWORD)),
    )
}

fn field<'a>(values: &'a HashMap<String, String>, name: &str) -> &'a str {
    values.get(name).map(String::as_str).unwrap_or_default()
}

/// Validate one pair of raw values and ask the store about them
pub fn authenticate<S>(service: &S, name: &str, password: &str) -> Result<Outcome<User>>
where
    S: CredentialService + ?Sized,
{
    let name = name.trim();
    let password = password.trim();
    if let Some(message) = missing_fields(&[(NAME, name), (PASSWORD, password)]) {
        return Ok(Outcome::failure(message));
    }

    let signed_in = |role: UserRole| {
        info!(user = name, %role, "signed in");
        Outcome::Success(User::new(role, name))
    };
    let outcome = match service.sign_in(name, password)? {
        CredentialResult::OkAdmin => signed_in(UserRole::Admin),
        CredentialResult::OkEntrepreneur => signed_in(UserRole::Entrepreneur),
        CredentialResult::OkCompany => signed_in(UserRole::Company),
        CredentialResult::NotFound => Outcome::failure("There isn't a user with the specified name."),
        CredentialResult::InvalidPassword => Outcome::failure("Incorrect password."),
    };
    Ok(outcome)
}

/// Message naming every blank field, in the order given
fn missing_fields(fields: &[(&str, &str)]) -> Option<String> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        return None;
    }
    Some(format!(
        "The following required arguments are missing: {}",
        missing.join(", ")
    ))
}
