//! A keyed set of fields validated and reset together.

use std::collections::BTreeMap;

use tracing::debug;

use super::{FormError, FormResult};
use crate::models::FieldError;
use crate::validation::FieldController;

/// Keyed set of field controllers plus one optional form-level message.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    fields: BTreeMap<String, FieldController>,
    form_error: Option<String>,
}

impl FormSession {
    /// An empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `controller` under `key`.
    ///
    /// # Errors
    /// Returns [`FormError::DuplicateField`] if `key` is taken.
    pub fn add_field(
        &mut self,
        key: impl Into<String>,
        controller: FieldController,
    ) -> FormResult<()> {
        let key = key.into();
        if self.fields.contains_key(&key) {
            return Err(FormError::DuplicateField(key));
        }
        self.fields.insert(key, controller);
        Ok(())
    }

    /// Builder form of [`FormSession::add_field`].
    ///
    /// # Errors
    /// Returns [`FormError::DuplicateField`] if `key` is taken.
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        controller: FieldController,
    ) -> FormResult<Self> {
        self.add_field(key, controller)?;
        Ok(self)
    }

    /// Registered keys in order.
    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The field under `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldController> {
        self.fields.get(key)
    }

    fn field_mut(&mut self, key: &str) -> FormResult<&mut FieldController> {
        self.fields
            .get_mut(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }

    /// Current value of `key`, or `""` for an unknown key.
    #[must_use]
    pub fn value(&self, key: &str) -> &str {
        self.fields.get(key).map_or("", FieldController::value)
    }

    /// Key/value pairs for every field.
    #[must_use]
    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|(key, field)| (key.clone(), field.value().to_string()))
            .collect()
    }

    /// Edits a field. Also clears the form-level message.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for an unregistered key.
    pub fn set_value(&mut self, key: &str, text: impl Into<String>) -> FormResult<()> {
        self.field_mut(key)?.set_value(text);
        self.form_error = None;
        Ok(())
    }

    /// Focuses a field.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for an unregistered key.
    pub fn focus(&mut self, key: &str) -> FormResult<()> {
        self.field_mut(key)?.on_focus();
        Ok(())
    }

    /// Blurs a field.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for an unregistered key.
    pub fn blur(&mut self, key: &str) -> FormResult<()> {
        self.field_mut(key)?.on_blur();
        Ok(())
    }

    /// Attaches an error to one field until it is next edited.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for an unregistered key.
    pub fn attach_error(&mut self, key: &str, message: impl Into<String>) -> FormResult<()> {
        self.field_mut(key)?.attach_error(message);
        Ok(())
    }

    /// Drops the attached error on `key`.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for an unregistered key.
    pub fn clear_error(&mut self, key: &str) -> FormResult<()> {
        self.field_mut(key)?.clear_error();
        Ok(())
    }

    /// The form-level message, if any.
    #[must_use]
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Sets the form-level message.
    pub fn set_form_error(&mut self, message: impl Into<String>) {
        self.form_error = Some(message.into());
    }

    /// Runs every field's required/pattern check.
    ///
    /// Failures become visible on their fields until the next edit.
    /// Errors attached from outside are kept. The returned map is empty
    /// exactly when every field passes its check.
    pub fn validate_all(&mut self) -> BTreeMap<String, FieldError> {
        let mut failures = BTreeMap::new();
        for (key, field) in &mut self.fields {
            if let Err(error) = field.validate() {
                failures.insert(key.clone(), error);
            }
        }
        debug!(failed = failures.len(), total = self.fields.len(), "validated form");
        failures
    }

    /// Every field is valid and none shows an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields
            .values()
            .all(|field| field.is_valid() && !field.shows_error())
    }

    /// Visible inline errors by key.
    #[must_use]
    pub fn errors(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|(key, field)| {
                field
                    .error_text()
                    .map(|message| (key.clone(), message.to_string()))
            })
            .collect()
    }

    /// Replaces every field with a fresh controller and drops the
    /// form-level message.
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            *field = field.renew();
        }
        self.form_error = None;
    }
}
