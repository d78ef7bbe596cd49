use thiserror::Error;

/// Result type alias using UserDbError
pub type Result<T> = std::result::Result<T, UserDbError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure a tool invocation can report maps onto one of these kinds.
/// Each kind has a stable code that is carried in error envelopes so the
/// agent runtime (and tests) can branch on it without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Data
    DuplicateEmail,
    NotFound,
    InvalidArgument,

    // Tool surface
    UnknownTool,
    InvalidInput,

    // Process boundary
    Config,

    // Integration/IO
    Persistence,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DuplicateEmail => "ERR_DUPLICATE_EMAIL",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::UnknownTool => "ERR_UNKNOWN_TOOL",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification plus the context needed to render a presentable message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    user_id: Option<i64>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            user_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the id of the user row involved
    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    /// Human-readable message, suitable for showing to the end user
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(user_id) = self.user_id {
            write!(f, " (user_id: {})", user_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for user store operations and the tool surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UserDbError {
    /// Insert or update would give two users the same email
    #[error("A user with the email '{email}' already exists.")]
    DuplicateEmail { email: String },

    /// No row with this id
    #[error("User with ID {user_id} was not found.")]
    UserNotFound { user_id: i64 },

    /// The caller supplied arguments the operation cannot act on
    #[error("{reason}")]
    InvalidArgument { reason: String },

    /// Any other failure reported by SQLite
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// A required credential is absent from the environment
    #[error("{var} not found in environment variables.")]
    MissingCredential { var: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidToolArguments { tool: String, reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl UserDbError {
    /// The update call named neither `name` nor `email`
    pub fn no_update_fields() -> Self {
        UserDbError::InvalidArgument {
            reason: "At least one field (name or email) must be provided for update.".to_string(),
        }
    }

    /// Canonical kind this error maps to
    pub fn kind(&self) -> ExErrorKind {
        match self {
            UserDbError::DuplicateEmail { .. } => ExErrorKind::DuplicateEmail,
            UserDbError::UserNotFound { .. } => ExErrorKind::NotFound,
            UserDbError::InvalidArgument { .. } => ExErrorKind::InvalidArgument,
            UserDbError::Storage { .. } => ExErrorKind::Persistence,
            UserDbError::MissingCredential { .. } | UserDbError::InvalidConfig { .. } => {
                ExErrorKind::Config
            }
            UserDbError::UnknownTool { .. } => ExErrorKind::UnknownTool,
            UserDbError::InvalidToolArguments { .. } => ExErrorKind::InvalidInput,
            UserDbError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }
}

/// Conversion from UserDbError to ExError
impl From<UserDbError> for ExError {
    fn from(err: UserDbError) -> Self {
        let ex = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            UserDbError::UserNotFound { user_id } => ex.with_user_id(user_id),
            UserDbError::DuplicateEmail { .. } => ex.with_op("write_user"),
            UserDbError::MissingCredential { .. } | UserDbError::InvalidConfig { .. } => {
                ex.with_op("load_config")
            }
            _ => ex,
        }
    }
}

impl From<serde_json::Error> for UserDbError {
    fn from(err: serde_json::Error) -> Self {
        UserDbError::Serialization {
            message: err.to_string(),
        }
    }
}
