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

//! Entry point to the bike shop service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use iii_iv_bikeshop::db::init_schema;
use iii_iv_bikeshop::{port_from_env, serve};
use iii_iv_core::db::Db;
use iii_iv_core::db::postgres::{PostgresDb, PostgresOptions};
use log::{error, info};
use std::net::Ipv4Addr;
use std::process;
use std::sync::Arc;

/// Prints `message` as an error and terminates the process.
fn die(message: String) -> ! {
    error!("{}", message);
    process::exit(1);
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let port = port_from_env().unwrap_or_else(|e| die(e));
    let addr = (Ipv4Addr::UNSPECIFIED, port);

    let db_opts = PostgresOptions::from_env("DATABASE").unwrap_or_else(|e| die(e));
    let db: Arc<dyn Db + Send + Sync> = match PostgresDb::connect(db_opts) {
        Ok(db) => Arc::new(db),
        Err(e) => die(format!("Failed to set up the database pool: {}", e)),
    };

    let schema_result = match db.ex().await {
        Ok(mut ex) => init_schema(&mut ex).await,
        Err(e) => Err(e),
    };
    if let Err(e) = schema_result {
        die(format!("Failed to initialize the database schema: {}", e));
    }
    info!("Database schema ready; starting server on port {}", port);

    if let Err(e) = serve(addr, db).await {
        die(format!("Server failed: {}", e));
    }
}
