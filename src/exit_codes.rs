//! Exit code constants shared by both binaries.
//!
//! - 0: Success (no differences, or extraction completed)
//! - 1: Differences found by `gcode-compare`
//! - 2: User error (bad arguments or configuration)
//! - 3: I/O failure (unreadable input, unwritable report)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// The comparison completed and at least one position differed.
pub const DIFFERENCES_FOUND: i32 = 1;

/// Invalid arguments or configuration. Matches clap's usage-error status.
pub const USER_ERROR: i32 = 2;

/// An input file could not be read or the report could not be written.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, DIFFERENCES_FOUND, USER_ERROR, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn usage_errors_share_clap_status() {
        let err = clap::Error::new(clap::error::ErrorKind::MissingRequiredArgument);
        assert_eq!(USER_ERROR, err.exit_code());
    }
}
