//! Exit code constants for CLI commands
//!
//! - 0: Success, including a clean server shutdown
//! - 1: Server startup or transport failure
//! - 2: Command failures such as unwritable output

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Server could not start or its transport failed
pub const EXIT_WARNING: i32 = 1;

/// Command failed
pub const EXIT_ERROR: i32 = 2;
