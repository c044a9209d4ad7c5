// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Business logic for the service.
//!
//! Most operations map to a single database statement.  Operations that modify or delete an
//! entry that does not exist succeed without changes, and only leave a trace in the logs.

use iii_iv_core::db::Db;
use log::warn;
use std::sync::Arc;

mod associations;
mod bikes;
mod customers;
mod manufacturers;
mod products;
#[cfg(test)]
pub(crate) mod testutils;

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": they start and commit a
/// transaction if they need one, so it is incorrect for the caller to use two separate calls.
/// For this reason, these operations consume the driver in an attempt to minimize the
/// possibility of executing two operations.
#[derive(Clone)]
pub(crate) struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub(crate) fn new(db: Arc<dyn Db + Send + Sync>) -> Self {
        Self { db }
    }
}

/// Logs a warning if an operation described by `what` did not touch any rows.
fn warn_if_untouched(rows_affected: u64, what: &str) {
    if rows_affected == 0 {
        warn!("{} did not match any existing entry", what);
    }
}
