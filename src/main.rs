//! signin-tui - terminal sign-in front end
//!
//! Asks the operator for a name and password, checks them against a JSON
//! users file and prints the signed-in user, or "No user" when the operator
//! gives up.

mod channel;
mod config;
mod error;
mod form;
mod signin;
mod state;
mod store;

use anyhow::Result;
use channel::{StreamChannel, TerminalChannel, TextChannel};
use config::SigninConfig;
use std::io::{self, IsTerminal};
use store::JsonUserStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signin_tui=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let result = run();

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run() -> Result<()> {
    let config = SigninConfig::load()?;
    let store = JsonUserStore::new(config.users_file());
    tracing::info!(path = %store.path().display(), "using users file");

    // Piped input is read as one stream; crossterm would read keys from the tty
    let mut channel: Box<dyn TextChannel> = if io::stdin().is_terminal() {
        Box::new(TerminalChannel::new())
    } else {
        tracing::debug!("stdin is not a terminal, reading it as a stream");
        Box::new(StreamChannel::new(io::stdin().lock(), io::stdout()))
    };
    match signin::sign_in(channel.as_mut(), &store, config.form_options())? {
        Some(user) => println!("{user}"),
        None => println!("No user"),
    }
    Ok(())
}
