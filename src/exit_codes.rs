//! Exit code constants for the madlib CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown story, bad template pack file)
//! - 2: Template parse failure
//! - 3: Story storage failure
//! - 4: Interactive input failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown story number, or unreadable pack file.
pub const USER_ERROR: i32 = 1;

/// Template parse failure: unmatched brace or empty placeholder in a template.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Story storage failure: the story directory or a story file could not be
/// created, written, or read.
pub const STORAGE_FAILURE: i32 = 3;

/// Interactive input failure: the line editor could not be initialized or
/// reading from the terminal failed.
pub const INPUT_FAILURE: i32 = 4;
