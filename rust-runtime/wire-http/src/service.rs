/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Support for service capability sets.
//!
//! Each service crate exposes a trait with one method per operation. Every method defaults to
//! [`OperationError::NotImplemented`], so an implementation only overrides what it supports and
//! stays complete against the full set.

use crate::error::{MarshallError, UnmarshallError};
use thiserror::Error;

/// Failure of a single operation call.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The implementation does not support this operation.
    #[error("operation {operation} is not implemented")]
    NotImplemented {
        /// Name of the operation
        operation: &'static str,
    },
    /// The request could not be marshalled.
    #[error(transparent)]
    Marshall(#[from] MarshallError),
    /// The response could not be unmarshalled.
    #[error(transparent)]
    Unmarshall(#[from] UnmarshallError),
}

impl OperationError {
    /// The default outcome of an operation without an implementation.
    pub fn not_implemented(operation: &'static str) -> Self {
        OperationError::NotImplemented { operation }
    }

    /// True if this is [`OperationError::NotImplemented`].
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, OperationError::NotImplemented { .. })
    }
}

/// Result of an operation call.
pub type OperationResult<T> = Result<T, OperationError>;

#[cfg(test)]
mod test {
    use super::*;

    trait Widgets {
        fn list_widgets(&self) -> OperationResult<Vec<String>> {
            Err(OperationError::not_implemented("ListWidgets"))
        }

        fn delete_widget(&self, _name: &str) -> OperationResult<()> {
            Err(OperationError::not_implemented("DeleteWidget"))
        }
    }

    struct Unimplemented;
    impl Widgets for Unimplemented {}

    struct ListOnly;
    impl Widgets for ListOnly {
        fn list_widgets(&self) -> OperationResult<Vec<String>> {
            Ok(vec!["w".into()])
        }
    }

    #[test]
    fn defaults_are_not_implemented() {
        let err = Unimplemented.list_widgets().unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(format!("{}", err), "operation ListWidgets is not implemented");
        assert!(Unimplemented.delete_widget("w").unwrap_err().is_not_implemented());
    }

    #[test]
    fn overrides_leave_the_rest_unimplemented() {
        assert_eq!(ListOnly.list_widgets().unwrap(), vec!["w".to_string()]);
        assert!(matches!(
            ListOnly.delete_widget("w"),
            Err(OperationError::NotImplemented {
                operation: "DeleteWidget"
            })
        ));
    }

    #[test]
    fn transcoding_failures_convert() {
        let err: OperationError = MarshallError::InvalidRequest.into();
        assert!(!err.is_not_implemented());
        assert!(matches!(err, OperationError::Marshall(_)));
        let err: OperationError = UnmarshallError::malformed("truncated").into();
        assert_eq!(format!("{}", err), "malformed wire data: truncated");
    }
}
