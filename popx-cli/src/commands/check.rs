//! `popx check`: run one value through a field controller as if the user
//! had typed it and left the field.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use shared::{FieldController, FieldOptions, FieldState, InputKind};

/// Arguments for `popx check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input kind: free-form, name, username, address, numeric, email, password
    #[arg(long, short, default_value = "free-form")]
    pub kind: String,

    /// Treat an empty value as an error
    #[arg(long)]
    pub required: bool,

    /// Pattern replacing the kind's built-in one
    #[arg(long)]
    pub pattern: Option<String>,

    /// Message replacing the kind's built-in one
    #[arg(long)]
    pub message: Option<String>,

    /// The value to check
    #[arg(default_value = "")]
    pub value: String,
}

fn options(args: &CheckArgs) -> FieldOptions {
    let mut options = FieldOptions::new(InputKind::from_name(&args.kind)).show_success();
    options.required = args.required;
    options.pattern.clone_from(&args.pattern);
    options.error_message.clone_from(&args.message);
    options
}

/// Runs the check. Fails with the field's error text when the value is rejected.
pub fn run(args: &CheckArgs) -> Result<()> {
    let mut field = FieldController::new(options(args))?;
    field.on_focus();
    field.set_value(args.value.as_str());
    field.on_blur();

    let state = field.state();
    let label = match state {
        FieldState::Success => state.as_ref().green(),
        FieldState::Error => state.as_ref().red(),
        _ => state.as_ref().normal(),
    };
    println!("kind:  {}", field.profile().kind());
    println!("state: {label}");

    match field.error_text() {
        Some(message) => bail!("{message}"),
        None => Ok(()),
    }
}
