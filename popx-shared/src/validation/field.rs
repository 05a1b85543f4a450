//! Field controller: one input's value, its interaction flags, and the
//! presentation state derived from them.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use tracing::debug;

use super::pattern::{Pattern, ProfileError};
use super::profile::{InputKind, ProfileOverrides, ValidationProfile, resolve};
use crate::models::FieldError;

const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";

/// Every recognised option for a field, with its default.
///
/// Options are validated once by [`FieldController::new`]; a malformed
/// `pattern` is rejected there rather than when the field is evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Validation preset. Defaults to free-form.
    pub kind: InputKind,
    /// Visible label, also used to phrase the required message.
    pub label: Option<String>,
    /// Replaces the preset's placeholder.
    pub placeholder: Option<String>,
    /// Replaces the preset's error message.
    pub error_message: Option<String>,
    /// Replaces the preset's pattern.
    pub pattern: Option<String>,
    /// Message for an empty required field. Defaults to
    /// "`<label>` is required".
    pub required_message: Option<String>,
    /// Hint shown under the field while it has no error.
    pub helper_text: Option<String>,
    /// An empty value is invalid when set.
    pub required: bool,
    /// Administratively disabled; overrides every other state.
    pub disabled: bool,
    /// Report [`FieldState::Success`] for valid non-empty values.
    pub show_success: bool,
}

impl FieldOptions {
    /// Options for `kind` with every other setting at its default.
    #[must_use]
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Marks the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Enables success indication.
    #[must_use]
    pub fn show_success(mut self) -> Self {
        self.show_success = true;
        self
    }

    /// Starts the field disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Overrides the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Overrides the error message.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Overrides the pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Overrides the required message.
    #[must_use]
    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    /// Sets the helper text.
    #[must_use]
    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    fn overrides(&self) -> Result<ProfileOverrides, ProfileError> {
        Ok(ProfileOverrides {
            placeholder: self.placeholder.clone(),
            error_message: self.error_message.clone(),
            pattern: self.pattern.as_deref().map(Pattern::new).transpose()?,
        })
    }
}

/// Presentation state of a field. Exactly one applies at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FieldState {
    /// Idle, no feedback.
    Default,
    /// Has input focus.
    Focused,
    /// Shows an inline error.
    Error,
    /// Holds a valid value and success indication is on.
    Success,
    /// Administratively disabled.
    Disabled,
}

/// Owns a field's value and flags and derives everything else on demand.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct FieldController {
    value: String,
    profile: ValidationProfile,
    label: Option<String>,
    helper_text: Option<String>,
    required_message: String,
    required: bool,
    disabled: bool,
    show_success: bool,
    touched: bool,
    focused: bool,
    checked: bool,
    external_error: Option<String>,
}

impl FieldController {
    /// Builds a controller from validated options.
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidPattern`] if `options.pattern` does
    /// not compile.
    pub fn new(options: FieldOptions) -> Result<Self, ProfileError> {
        let profile = resolve(options.kind, &options.overrides()?);
        let required_message = options.required_message.unwrap_or_else(|| {
            options.label.as_deref().map_or_else(
                || DEFAULT_REQUIRED_MESSAGE.to_string(),
                |label| format!("{} is required", label.trim_end_matches('*')),
            )
        });

        Ok(Self {
            value: String::new(),
            profile,
            label: options.label,
            helper_text: options.helper_text,
            required_message,
            required: options.required,
            disabled: options.disabled,
            show_success: options.show_success,
            touched: false,
            focused: false,
            checked: false,
            external_error: None,
        })
    }

    /// A controller for `kind` with default options.
    #[must_use]
    pub fn for_kind(kind: InputKind) -> Self {
        Self::from_profile(resolve(kind, &ProfileOverrides::default()))
    }

    /// A controller around an already resolved profile.
    #[must_use]
    pub fn from_profile(profile: ValidationProfile) -> Self {
        Self {
            value: String::new(),
            profile,
            label: None,
            helper_text: None,
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
            required: false,
            disabled: false,
            show_success: false,
            touched: false,
            focused: false,
            checked: false,
            external_error: None,
        }
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The effective profile.
    #[must_use]
    pub const fn profile(&self) -> &ValidationProfile {
        &self.profile
    }

    /// The field's label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Effective placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        self.profile.placeholder()
    }

    /// Helper text, suppressed while an error is shown.
    #[must_use]
    pub fn helper_text(&self) -> Option<&str> {
        if self.shows_error() {
            None
        } else {
            self.helper_text.as_deref()
        }
    }

    /// Whether an empty value is invalid.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the field is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the field has lost focus at least once.
    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    /// Whether the field currently has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Error attached from outside the field, if any.
    #[must_use]
    pub fn external_error(&self) -> Option<&str> {
        self.external_error.as_deref()
    }

    /// Replaces the value. Flags are left alone; an attached external
    /// error and the result of the last [`validate`](Self::validate) are
    /// cleared.
    pub fn set_value(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.checked = false;
        if self.external_error.take().is_some() {
            debug!(kind = %self.profile.kind(), "cleared external field error on edit");
        }
    }

    /// Records that the field gained focus.
    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    /// Records that the field lost focus and marks it touched.
    pub fn on_blur(&mut self) {
        self.focused = false;
        if !self.touched {
            self.touched = true;
            debug!(kind = %self.profile.kind(), "field touched");
        }
    }

    /// Enables or disables the field.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Attaches an error that holds until the next edit.
    pub fn attach_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(kind = %self.profile.kind(), %message, "attached field error");
        self.external_error = Some(message);
    }

    /// Drops any attached error.
    pub fn clear_error(&mut self) {
        self.external_error = None;
    }

    /// Clears the value, focus, and attached error. A touched field stays
    /// touched.
    pub fn reset(&mut self) {
        self.value.clear();
        self.focused = false;
        self.checked = false;
        self.external_error = None;
    }

    /// A fresh controller with the same profile and options, as if just
    /// constructed.
    #[must_use]
    pub fn renew(&self) -> Self {
        Self {
            value: String::new(),
            touched: false,
            focused: false,
            checked: false,
            external_error: None,
            ..self.clone()
        }
    }

    /// Empty values pass unless the field is required; anything else must
    /// match the pattern.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.value.is_empty() {
            !self.required
        } else {
            self.profile.matches(&self.value)
        }
    }

    /// The required/pattern check as a result.
    ///
    /// # Errors
    /// Returns the [`FieldError`] describing why the value is not valid.
    pub fn check(&self) -> Result<(), FieldError> {
        if self.is_valid() {
            Ok(())
        } else if self.value.is_empty() {
            Err(FieldError::required(self.required_message.clone()))
        } else {
            Err(FieldError::invalid(self.profile.error_message()))
        }
    }

    /// Runs [`check`](Self::check) on behalf of a submit and makes a
    /// failure visible even if the field was never touched. The failure
    /// stays visible until the next edit. Attached errors are left alone.
    ///
    /// # Errors
    /// Returns the [`FieldError`] describing why the value is not valid.
    pub fn validate(&mut self) -> Result<(), FieldError> {
        self.checked = true;
        self.check()
    }

    /// Whether an inline error is visible: an attached error, or a touched
    /// or submitted field holding an invalid value.
    #[must_use]
    pub fn shows_error(&self) -> bool {
        !self.disabled
            && (self.external_error.is_some()
                || ((self.touched || self.checked) && !self.is_valid()))
    }

    /// Derives the presentation state.
    #[must_use]
    pub fn state(&self) -> FieldState {
        if self.disabled {
            FieldState::Disabled
        } else if self.shows_error() {
            FieldState::Error
        } else if self.show_success && !self.value.is_empty() && self.profile.matches(&self.value)
        {
            FieldState::Success
        } else if self.focused {
            FieldState::Focused
        } else {
            FieldState::Default
        }
    }

    /// The inline message, present only in [`FieldState::Error`].
    ///
    /// Precedence: the attached error, then the required message when the
    /// value is empty, then the profile's error message.
    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        if self.state() != FieldState::Error {
            return None;
        }
        if let Some(message) = self.external_error.as_deref() {
            Some(message)
        } else if self.value.is_empty() {
            Some(&self.required_message)
        } else {
            Some(self.profile.error_message())
        }
    }
}
