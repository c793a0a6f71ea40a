// src/exit.rs
//! Standardized process exit codes for `routegraph`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::RouteError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RouteExit {
    /// Query answered (including an empty listing).
    Success = 0,
    /// Generic error (e.g. IO, engine defect).
    Error = 1,
    /// Edge file, weight, config or `--block` argument rejected.
    InvalidInput = 2,
    /// Both nodes exist but the target is unreachable.
    NoPath = 3,
    /// A queried or blocked node is not in the graph.
    UnknownNode = 4,
}

impl RouteExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps an error chain onto an exit code by its root `RouteError`, if any.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RouteError>() {
            Some(RouteError::UnknownNode(_)) => Self::UnknownNode,
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for RouteExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            RouteExit::Success,
            RouteExit::Error,
            RouteExit::InvalidInput,
            RouteExit::NoPath,
            RouteExit::UnknownNode,
        ]
        .map(RouteExit::code);
        for (i, a) in codes.iter().enumerate() {
            assert!(codes.iter().skip(i + 1).all(|b| a != b));
        }
    }

    #[test]
    fn test_for_error() {
        let unknown = anyhow::Error::new(RouteError::UnknownNode("Z".into()));
        assert_eq!(RouteExit::for_error(&unknown), RouteExit::UnknownNode);

        let malformed = anyhow::Error::new(RouteError::MalformedRow {
            line: 2,
            reason: "x".into(),
        });
        assert_eq!(RouteExit::for_error(&malformed), RouteExit::InvalidInput);

        let other = anyhow::anyhow!("boom");
        assert_eq!(RouteExit::for_error(&other), RouteExit::Error);
    }
}
