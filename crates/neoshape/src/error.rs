// Neoshape - Graph Query Result Shaping
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for result shaping.

use thiserror::Error;

/// Error type for shaping and rendering operations.
///
/// # Examples
///
/// ```
/// use neoshape::ShapeError;
///
/// let err = ShapeError::TypeMismatch {
///     expected: "Node",
///     actual: "Map",
/// };
/// assert_eq!(err.to_string(), "type mismatch: expected Node, got Map");
/// ```
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A value was handed to a converter for a different graph entity type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The entity type the converter handles.
        expected: &'static str,
        /// The runtime type that was encountered.
        actual: &'static str,
    },

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8.
    #[error("invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being rendered.
        context: String,
    },

    /// I/O error while writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for shaping operations.
pub type Result<T> = std::result::Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_names_both_types() {
        let err = ShapeError::TypeMismatch {
            expected: "Relationship",
            actual: "Node",
        };
        let msg = err.to_string();
        assert!(msg.contains("Relationship"));
        assert!(msg.contains("Node"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: ShapeError = json_err.into();
        assert!(matches!(err, ShapeError::Json(_)));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ShapeError = io_err.into();
        assert!(err.to_string().contains("closed"));
    }
}
