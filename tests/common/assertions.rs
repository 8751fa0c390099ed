//! Domain-specific assertion macros for os101 harnesses.
//!
//! These add context to failures so it is clear which flow produced the
//! wrong error class.

/// Assert that a flow result is an `Err` of the given `os101_core::Error`
/// variant pattern.
///
/// ```rust
/// assert_flow_err!(result, os101_core::Error::Duplicate(_));
/// ```
#[macro_export]
macro_rules! assert_flow_err {
    ($result:expr, $pattern:pat) => {{
        match &$result {
            Err(e) if matches!(e, $pattern) => {}
            Err(e) => panic!(
                "assert_flow_err! failed:\n  expected: {}\n  actual:   {:?}",
                stringify!($pattern),
                e
            ),
            Ok(v) => panic!(
                "assert_flow_err! failed: expected {}, flow succeeded with {:?}",
                stringify!($pattern),
                v
            ),
        }
    }};
}

/// Assert that captured command output contains every given line.
#[macro_export]
macro_rules! assert_output_contains {
    ($output:expr, $($needle:expr),+ $(,)?) => {{
        let output: &str = &$output;
        $(
            assert!(
                output.contains($needle),
                "assert_output_contains! failed: {:?} not found in output:\n{}",
                $needle,
                output
            );
        )+
    }};
}
