//! Exit code constants for the stylecfg CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing file, I/O)
//! - 2: Schema failure (missing required key, wrong value type)
//! - 3: Validation failure (malformed glob, hex color or shade key)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, config file not found or unreadable.
pub const USER_ERROR: i32 = 1;

/// Schema failure: the document does not have the expected shape.
pub const SCHEMA_FAILURE: i32 = 2;

/// Validation failure: a value has the right type but is malformed.
pub const VALIDATION_FAILURE: i32 = 3;
