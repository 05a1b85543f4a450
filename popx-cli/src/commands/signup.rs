//! `popx signup`: fill in and submit the create-account form.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use rpassword::prompt_password;
use shared::config::Config;
use shared::forms::create_account::{COMPANY_NAME, EMAIL, FULL_NAME, PASSWORD, PHONE_NUMBER};
use shared::{CreateAccountForm, FormError};

use super::{open_directory, print_summary};

/// Sign-up form values.
#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Full name (letters and spaces)
    #[arg(long)]
    pub full_name: String,

    /// Phone number (digits)
    #[arg(long)]
    pub phone: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Password (at least 8 characters). Prompted for when omitted.
    #[arg(long)]
    pub password: Option<String>,

    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Register as an agency
    #[arg(long)]
    pub agency: bool,
}

/// Submits the form and prints the new account.
pub fn run(config: &Config, args: SignupArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };

    let mut form = CreateAccountForm::new(open_directory(config), config.show_success)?;
    form.set_value(FULL_NAME, args.full_name)?;
    form.set_value(PHONE_NUMBER, args.phone)?;
    form.set_value(EMAIL, args.email)?;
    form.set_value(PASSWORD, password)?;
    form.set_value(COMPANY_NAME, args.company.unwrap_or_default())?;
    form.set_agency(args.agency);

    match form.submit() {
        Ok(record) => {
            println!("{}", "Account created".green());
            print_summary(&record.summary());
            Ok(())
        }
        Err(FormError::Validation(failures)) => {
            for (key, error) in &failures {
                eprintln!("{} {key}: {error}", "x".red());
            }
            bail!("account not created: {} field(s) need attention", failures.len())
        }
        Err(FormError::DuplicateRecord { email }) => {
            bail!("Email already exists: {email}")
        }
        Err(other) => Err(other.into()),
    }
}
