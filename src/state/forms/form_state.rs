//! Form state: ordered fields, a cursor and the Select/Edit mode

use std::collections::HashMap;

use super::field::FormField;
use crate::error::SigninError;

/// Whether the cursor moves between fields or the active field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Select,
    Edit,
}

impl FormMode {
    pub fn label(&self) -> &'static str {
        match self {
            FormMode::Select => "SELECT",
            FormMode::Edit => "EDIT",
        }
    }
}

/// Normalize raw field names: trim, drop blanks, keep the first occurrence
pub fn field_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique: Vec<String> = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() || unique.iter().any(|existing| existing == name) {
            continue;
        }
        unique.push(name.to_string());
    }
    unique
}

/// State of one form-filling session
///
/// `cursor` always indexes an existing field; an empty form cannot be built.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FormField>,
    cursor: usize,
    mode: FormMode,
}

impl FormState {
    /// Build a form from raw field names (see [`field_names`])
    pub fn new<I, S>(names: I) -> Result<Self, SigninError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<FormField> = field_names(names)
            .iter()
            .map(|name| FormField::new(name))
            .collect();
        if fields.is_empty() {
            return Err(SigninError::EmptyForm);
        }
        Ok(Self {
            fields,
            cursor: 0,
            mode: FormMode::Select,
        })
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn active_field(&self) -> &FormField {
        &self.fields[self.cursor]
    }

    /// Move the cursor up one field. Returns false at the first field.
    pub fn move_up(&mut self) -> bool {
        if self.mode != FormMode::Select || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor down one field. Returns false at the last field.
    pub fn move_down(&mut self) -> bool {
        if self.mode != FormMode::Select || self.cursor + 1 >= self.fields.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Put the cursor on `index`, clamped to the last field
    pub fn focus(&mut self, index: usize) {
        self.cursor = index.min(self.fields.len() - 1);
    }

    pub fn begin_edit(&mut self) {
        self.mode = FormMode::Edit;
    }

    /// Store a line of input in the active field and go back to Select
    pub fn finish_edit(&mut self, value: String) {
        if self.mode == FormMode::Edit {
            self.fields[self.cursor].set_value(value);
        }
        self.mode = FormMode::Select;
    }

    /// Drop back to Select without touching any value
    pub fn enter_select(&mut self) {
        self.mode = FormMode::Select;
    }

    /// Current values keyed by field name
    pub fn values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.name().to_string(), field.value().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(form: &FormState) -> Vec<&str> {
        form.fields().iter().map(FormField::name).collect()
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_names_are_trimmed_unique_and_ordered() {
            let names = field_names(["name", "  password ", "name", "", "   ", "password", "email"]);
            assert_eq!(names, vec!["name", "password", "email"]);
        }

        #[test]
        fn test_names_equal_after_trim_are_duplicates() {
            let names = field_names([" name", "name ", "name"]);
            assert_eq!(names, vec!["name"]);
        }

        #[test]
        fn test_new_starts_in_select_at_first_field() {
            let form = FormState::new(["name", "password"]).unwrap();
            assert_eq!(names(&form), vec!["name", "password"]);
            assert_eq!(form.cursor(), 0);
            assert_eq!(form.mode(), FormMode::Select);
            assert!(form.fields().iter().all(|f| f.value().is_empty()));
        }

        #[test]
        fn test_new_rejects_empty_list() {
            let result = FormState::new(Vec::<String>::new());
            assert!(matches!(result, Err(SigninError::EmptyForm)));
        }

        #[test]
        fn test_new_rejects_only_blank_names() {
            let result = FormState::new(["", "  ", "\t"]);
            assert!(matches!(result, Err(SigninError::EmptyForm)));
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_move_up_at_top_is_noop() {
            let mut form = FormState::new(["a", "b"]).unwrap();
            assert!(!form.move_up());
            assert_eq!(form.cursor(), 0);
        }

        #[test]
        fn test_move_down_at_bottom_is_noop() {
            let mut form = FormState::new(["a", "b"]).unwrap();
            assert!(form.move_down());
            assert!(!form.move_down());
            assert_eq!(form.cursor(), 1);
        }

        #[test]
        fn test_up_then_down_returns_to_same_index() {
            let mut form = FormState::new(["a", "b", "c", "d"]).unwrap();
            for start in 1..4 {
                form.focus(start);
                assert!(form.move_up());
                assert!(form.move_down());
                assert_eq!(form.cursor(), start);
            }
        }

        #[test]
        fn test_single_field_form_never_moves() {
            let mut form = FormState::new(["only"]).unwrap();
            assert!(!form.move_up());
            assert!(!form.move_down());
            assert_eq!(form.cursor(), 0);
        }

        #[test]
        fn test_cursor_does_not_move_while_editing() {
            let mut form = FormState::new(["a", "b"]).unwrap();
            form.begin_edit();
            assert!(!form.move_down());
            assert_eq!(form.cursor(), 0);
        }

        #[test]
        fn test_focus_clamps_to_last_field() {
            let mut form = FormState::new(["a", "b"]).unwrap();
            form.focus(10);
            assert_eq!(form.cursor(), 1);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_finish_edit_sets_active_value_and_returns_to_select() {
            let mut form = FormState::new(["name", "password"]).unwrap();
            form.move_down();
            form.begin_edit();
            assert_eq!(form.mode(), FormMode::Edit);
            form.finish_edit("ABC".to_string());
            assert_eq!(form.mode(), FormMode::Select);
            assert_eq!(form.fields()[1].value(), "ABC");
            assert_eq!(form.fields()[0].value(), "");
        }

        #[test]
        fn test_finish_edit_outside_edit_mode_keeps_value() {
            let mut form = FormState::new(["name"]).unwrap();
            form.finish_edit("ignored".to_string());
            assert_eq!(form.active_field().value(), "");
        }

        #[test]
        fn test_values_maps_names_to_values() {
            let mut form = FormState::new(["name", "password"]).unwrap();
            form.begin_edit();
            form.finish_edit("Bruno".to_string());
            let values = form.values();
            assert_eq!(values.len(), 2);
            assert_eq!(values["name"], "Bruno");
            assert_eq!(values["password"], "");
        }

        #[test]
        fn test_mode_labels() {
            assert_eq!(FormMode::Select.label(), "SELECT");
            assert_eq!(FormMode::Edit.label(), "EDIT");
        }
    }
}
