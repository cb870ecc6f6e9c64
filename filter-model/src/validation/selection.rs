use super::ValidationState;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SelectionError {
    Unknown(String),
}

/// Checks multi-select values against the options the host offers.
#[derive(Default, Debug)]
pub struct SelectionValidation {
    pub selection: ValidationState<SelectionError>,
}

impl SelectionValidation {
    pub fn check<S, O>(&mut self, selected: &[S], options: &[O])
    where
        S: AsRef<str>,
        O: AsRef<str>,
    {
        self.selection = Self::check_selection(selected, options);
    }

    fn check_selection<S, O>(selected: &[S], options: &[O]) -> ValidationState<SelectionError>
    where
        S: AsRef<str>,
        O: AsRef<str>,
    {
        selected
            .iter()
            .map(AsRef::as_ref)
            .find(|value| !options.iter().any(|option| option.as_ref() == *value))
            .map_or(ValidationState::Valid, |unknown| {
                ValidationState::Invalid(SelectionError::Unknown(unknown.to_owned()))
            })
    }
}
