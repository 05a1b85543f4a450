//! `popx login`: resolve credentials against stored accounts and the demo
//! account, then show the account summary.

use anyhow::{Result, bail};
use clap::Args;
use rpassword::prompt_password;
use shared::config::Config;
use shared::forms::login::{EMAIL, PASSWORD};
use shared::{ChainedCredentials, FormError, LoginForm, StaticCredentials};

use super::{open_directory, print_summary, prompt};

/// Login credentials.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address. Prompted for when omitted.
    #[arg(long)]
    pub email: Option<String>,

    /// Password. Prompted for when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

/// Logs in and prints the account summary.
pub fn run(config: &Config, args: LoginArgs) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => prompt("Email: ")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };

    let credentials = ChainedCredentials::new(open_directory(config), StaticCredentials::demo());
    let mut form = LoginForm::new(credentials)?;
    form.set_value(EMAIL, email)?;
    form.set_value(PASSWORD, password)?;

    match form.submit() {
        Ok(user) => {
            print_summary(&user.summary());
            Ok(())
        }
        Err(FormError::Validation(failures)) => {
            let messages: Vec<String> = failures.values().map(ToString::to_string).collect();
            bail!("{}", messages.join("; "))
        }
        Err(other) => bail!("{}", form.error().map_or_else(|| other.to_string(), str::to_string)),
    }
}
