//! Single-user login gate shown before the main loop.
//!
//! This is a hardcoded credential check, not real authentication: the app is
//! strictly personal and the gate only keeps casual passers-by out of the
//! terminal session.

use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::output;

const LOGIN_USER: &str = "admin";
const LOGIN_PASSWORD: &str = "bills";

/// Loops until the credentials match; interaction errors abort the program.
pub fn login(theme: &ColorfulTheme) -> Result<(), dialoguer::Error> {
    output::section("My Bills");
    loop {
        let user: String = Input::with_theme(theme)
            .with_prompt("User")
            .interact_text()?;
        let password = Password::with_theme(theme)
            .with_prompt("Password")
            .interact()?;
        if user == LOGIN_USER && password == LOGIN_PASSWORD {
            return Ok(());
        }
        output::error("Incorrect user or password");
    }
}
