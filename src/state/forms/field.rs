//! Form field value objects

/// A single named slot in a form
///
/// The name is fixed once the field exists; the value only changes through
/// [`FormState::finish_edit`](super::FormState::finish_edit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    name: String,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Name with its first letter upper-cased, used for line prompts
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub(super) fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        let field = FormField::new("name");
        assert_eq!(field.name(), "name");
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_label_capitalizes_first_letter() {
        assert_eq!(FormField::new("password").label(), "Password");
        assert_eq!(FormField::new("éclair").label(), "Éclair");
    }

    #[test]
    fn test_label_keeps_already_capitalized_name() {
        assert_eq!(FormField::new("Name").label(), "Name");
    }

    #[test]
    fn test_set_value_replaces_previous_value() {
        let mut field = FormField::new("name");
        field.set_value("Bruno".to_string());
        field.set_value("Santiago".to_string());
        assert_eq!(field.value(), "Santiago");
    }
}
