use crate::user::errors::Field;
use crate::user::errors::ValidationError;
use crate::user::models::UserPayload;
use crate::user::models::ValidationMode;

impl UserPayload {
    /// Strip leading and trailing whitespace from every field.
    pub fn prepare(&mut self) {
        for field in [
            &mut self.email,
            &mut self.first_name,
            &mut self.last_name,
            &mut self.password,
            &mut self.profile_image,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
    }

    /// Check required fields for the given mode.
    ///
    /// Fields are checked in a fixed order and the first empty one is reported.
    /// Login requires email then password; create requires first name, last
    /// name, email, then password.
    pub fn validate(&self, mode: ValidationMode) -> Result<(), ValidationError> {
        let required: Vec<(Field, &str)> = match mode {
            ValidationMode::Login => vec![
                (Field::Email, self.email.as_str()),
                (Field::Password, self.password.as_str()),
            ],
            ValidationMode::Create => vec![
                (Field::FirstName, self.first_name.as_str()),
                (Field::LastName, self.last_name.as_str()),
                (Field::Email, self.email.as_str()),
                (Field::Password, self.password.as_str()),
            ],
        };

        match required.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ValidationError::Required(field)),
            None => Ok(()),
        }
    }
}
