//! userdb core - domain model, error facility, and logging facility
//!
//! - `User`, `NewUser` and `UserPatch` with the partial-update merge rule
//! - `UserDbError` domain errors and the canonical `ExError`/`ExErrorKind`
//! - Structured logging via `tracing` with operation boundary macros

pub mod errors;
pub mod logging_facility;
pub mod model;

// Used by the exported logging macros
#[doc(hidden)]
pub use tracing;
#[doc(hidden)]
pub use userdb_core_types as core_types;

pub use errors::{ExError, ExErrorKind, Result, UserDbError};
pub use model::{NewUser, User, UserPatch};
