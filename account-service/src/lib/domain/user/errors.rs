use thiserror::Error;

/// A required inbound field was empty after trimming.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Required(Field),
}

/// Inbound user fields subject to presence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // Domain-level errors
    #[error("User already registered, please login")]
    AlreadyRegistered(String),

    #[error("Login failed, please signup")]
    NotRegistered(String),

    #[error("User not found")]
    NotFound(String),

    #[error("Login failed, please try again")]
    InvalidCredentials,

    #[error("Not allowed to modify another user's account")]
    Forbidden,

    // Credential infrastructure errors
    #[error("Password hashing failed: {0}")]
    Password(String),

    #[error("Token generation failed: {0}")]
    Token(String),

    // Infrastructure errors
    #[error("User lookup failed: {0}")]
    LookupFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
