//! CLI exit code registry.
//!
//! Exit codes are part of the shell contract; scripts gate on them.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success, every roster row matched         |
//! | 1    | General error                             |
//! | 2    | Usage error (reserved for clap)           |
//! | 3    | Invalid run config                        |
//! | 4    | Runtime error (IO, malformed input data)  |
//! | 5    | Run completed but unmatched rows remain   |

/// Success - run completed and every roster row matched.
pub const EXIT_SUCCESS: u8 = 0;

/// Config failed to parse or validate.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// IO failure or malformed input data (missing column, empty cell).
pub const EXIT_RUNTIME: u8 = 4;

/// The run itself succeeded, but some roster rows did not match any
/// test taker. Lets batch scripts gate on a clean reconciliation.
pub const EXIT_UNMATCHED: u8 = 5;
