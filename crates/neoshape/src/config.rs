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

//! Configuration types for result normalization and table rendering.

use serde::{Deserialize, Serialize};

/// Shape of the value returned by [`normalize_result`](crate::normalize_result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputShape {
    /// Column name mapped to the sequence of converted values.
    Columns,
    /// Row-aligned table.
    #[default]
    Table,
}

/// Configuration for normalizing a query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Also report the database name and query text (default: false).
    pub verbose: bool,

    /// Output shape (default: table).
    pub output: OutputShape,

    /// Replace a column holding a single list value with that list (default: true).
    ///
    /// This is what makes `RETURN collect(n) AS people` come back as one entry
    /// per collected item rather than a single list cell.
    pub unwrap_single_lists: bool,

    /// Convert graph entities nested inside lists and maps (default: false).
    ///
    /// When disabled, only top-level column values are converted and nested
    /// collections pass through unchanged.
    pub expand_nested: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            output: OutputShape::Table,
            unwrap_single_lists: true,
            expand_nested: false,
        }
    }
}

impl NormalizeConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for fine-grained configuration.
    pub fn builder() -> NormalizeConfigBuilder {
        NormalizeConfigBuilder::new()
    }

    /// Enable the database and query report.
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Return a row-aligned table.
    pub fn with_table(mut self) -> Self {
        self.output = OutputShape::Table;
        self
    }

    /// Return the column map instead of a table.
    pub fn with_columns(mut self) -> Self {
        self.output = OutputShape::Columns;
        self
    }

    /// Keep single-list columns wrapped.
    pub fn without_list_unwrapping(mut self) -> Self {
        self.unwrap_single_lists = false;
        self
    }

    /// Convert graph entities found inside nested collections.
    pub fn with_nested_expansion(mut self) -> Self {
        self.expand_nested = true;
        self
    }
}

/// Builder for [`NormalizeConfig`].
///
/// # Examples
///
/// ```
/// # use neoshape::{NormalizeConfig, OutputShape};
/// let config = NormalizeConfig::builder()
///     .verbose(true)
///     .output(OutputShape::Columns)
///     .build();
/// assert!(config.verbose);
/// assert!(config.unwrap_single_lists);
/// ```
#[derive(Debug, Default)]
pub struct NormalizeConfigBuilder {
    verbose: Option<bool>,
    output: Option<OutputShape>,
    unwrap_single_lists: Option<bool>,
    expand_nested: Option<bool>,
}

impl NormalizeConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether database and query text are reported.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Set the output shape.
    pub fn output(mut self, output: OutputShape) -> Self {
        self.output = Some(output);
        self
    }

    /// Set whether single-list columns are unwrapped.
    pub fn unwrap_single_lists(mut self, unwrap: bool) -> Self {
        self.unwrap_single_lists = Some(unwrap);
        self
    }

    /// Set whether nested graph entities are converted.
    pub fn expand_nested(mut self, expand: bool) -> Self {
        self.expand_nested = Some(expand);
        self
    }

    /// Build the configuration, filling unset values with defaults.
    pub fn build(self) -> NormalizeConfig {
        let default = NormalizeConfig::default();
        NormalizeConfig {
            verbose: self.verbose.unwrap_or(default.verbose),
            output: self.output.unwrap_or(default.output),
            unwrap_single_lists: self
                .unwrap_single_lists
                .unwrap_or(default.unwrap_single_lists),
            expand_nested: self.expand_nested.unwrap_or(default.expand_nested),
        }
    }
}

/// Configuration for CSV rendering of a [`Table`](crate::Table).
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}
