//! Shorten-form state

use std::collections::HashMap;

/// Field currently receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingField {
    #[default]
    TargetUrl,
    CustomCode,
}

impl EditingField {
    const ALL: [Self; 2] = [Self::TargetUrl, Self::CustomCode];

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Key for validation errors.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::TargetUrl => "target_url",
            Self::CustomCode => "custom_code",
        }
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    /// Destination URL input (required)
    pub target_url: String,
    /// Custom code input (empty = server picks)
    pub custom_code: String,
    /// Validation errors (field_name -> message)
    pub validation_errors: HashMap<String, String>,
    pub currently_editing: EditingField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.target_url.clear();
        self.custom_code.clear();
        self.validation_errors.clear();
        self.currently_editing = EditingField::default();
    }

    pub fn toggle_field(&mut self) {
        self.currently_editing = self.currently_editing.next();
    }

    fn current_input_mut(&mut self) -> &mut String {
        match self.currently_editing {
            EditingField::TargetUrl => &mut self.target_url,
            EditingField::CustomCode => &mut self.custom_code,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.current_input_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.current_input_mut().pop();
    }

    pub fn get_error(&self, field: EditingField) -> Option<&String> {
        self.validation_errors.get(field.field_name())
    }

    pub fn set_error(&mut self, field: EditingField, error: String) {
        self.validation_errors
            .insert(field.field_name().to_string(), error);
    }

    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_field_alternates() {
        let mut form = FormState::new();
        assert_eq!(form.currently_editing, EditingField::TargetUrl);

        form.toggle_field();
        assert_eq!(form.currently_editing, EditingField::CustomCode);

        form.toggle_field();
        assert_eq!(form.currently_editing, EditingField::TargetUrl);
    }

    #[test]
    fn input_goes_to_active_field() {
        let mut form = FormState::new();
        form.push_char('h');
        form.push_char('i');
        assert_eq!(form.target_url, "hi");

        form.toggle_field();
        form.push_char('x');
        assert_eq!(form.custom_code, "x");

        form.pop_char();
        assert_eq!(form.custom_code, "");
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = FormState::new();
        form.target_url = "https://example.com".to_string();
        form.custom_code = "mine".to_string();
        form.toggle_field();
        form.set_error(EditingField::TargetUrl, "bad".to_string());

        form.clear();

        assert!(form.target_url.is_empty());
        assert!(form.custom_code.is_empty());
        assert!(form.validation_errors.is_empty());
        assert_eq!(form.currently_editing, EditingField::TargetUrl);
    }
}
