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

//! Default reporting through a `tracing` subscriber.

use neoshape::{normalize_result, NormalizeConfig};
use neoshape_test::fixtures;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture(filter: &str, f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_timing_logged_at_info() {
    let output = capture("info", || {
        normalize_result(&fixtures::people_result(), &NormalizeConfig::new());
    });

    assert!(output.contains("Started streaming 2 records after 3 ms and completed after 12 ms."));
    assert!(!output.contains("Query executed against database"));
}

#[test]
fn test_verbose_logs_query() {
    let output = capture("info", || {
        normalize_result(
            &fixtures::people_result(),
            &NormalizeConfig::new().with_verbose(),
        );
    });

    assert!(output.contains("Query executed against database: 'movies': MATCH (p:Person) RETURN p"));
}

#[test]
fn test_ragged_table_warns() {
    let output = capture("info", || {
        normalize_result(&fixtures::mixed_result(), &NormalizeConfig::new());
        normalize_result(&fixtures::collected_names_result(), &NormalizeConfig::new());
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("column lengths differ"));
}
