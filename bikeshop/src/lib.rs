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

//! REST service to manage the catalog, customers and inventory of a bike shop.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use iii_iv_core::db::Db;
use iii_iv_core::env::get_optional_var;
use log::info;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub mod db;
pub(crate) mod driver;
use driver::Driver;
pub(crate) mod model;
mod rest;
use rest::app;

/// Port to listen on when `BIKESHOP_PORT` is not set.
const DEFAULT_PORT: u16 = 8000;

/// Gets the port to listen on from the `BIKESHOP_PORT` environment variable.
pub fn port_from_env() -> Result<u16, String> {
    Ok(get_optional_var::<u16>("BIKESHOP", "PORT")?.unwrap_or(DEFAULT_PORT))
}

/// Instantiates all resources to serve the application on `bind_addr` backed by `db`.
///
/// The schema of `db` must have been initialized beforehand with `db::init_schema`.
pub async fn serve(
    bind_addr: impl Into<SocketAddr>,
    db: Arc<dyn Db + Send + Sync>,
) -> Result<(), Box<dyn Error>> {
    let driver = Driver::new(db);
    let app = app(driver);

    let listener = TcpListener::bind(bind_addr.into()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_from_env_default() {
        temp_env::with_var_unset("BIKESHOP_PORT", || {
            assert_eq!(Ok(8000), port_from_env());
        });
    }

    #[test]
    fn test_port_from_env_set() {
        temp_env::with_var("BIKESHOP_PORT", Some("1234"), || {
            assert_eq!(Ok(1234), port_from_env());
        });
    }

    #[test]
    fn test_port_from_env_invalid() {
        temp_env::with_var("BIKESHOP_PORT", Some("70000"), || {
            let err = port_from_env().unwrap_err();
            assert!(err.contains("BIKESHOP_PORT"), "Unexpected error: {}", err);
        });
    }
}
