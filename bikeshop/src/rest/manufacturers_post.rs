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

//! API to create a manufacturer.

use crate::driver::Driver;
use crate::model::Manufacturer;
use axum::extract::State;
use axum::http;
use axum::response::IntoResponse;
use iii_iv_core::rest::{JsonBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(manufacturer): JsonBody<Manufacturer>,
) -> Result<impl IntoResponse, RestError> {
    let id = driver.create_manufacturer(manufacturer).await?;

    Ok((
        http::StatusCode::CREATED,
        format!("Manufacturer successfully created - Manufacturer Id: {}", id),
    ))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;
    use serde_json::json;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/manufacturers".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({"name": "Acme", "phone": "555-100"}))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_text("^Manufacturer successfully created - Manufacturer Id: 1$")
            .await;

        assert_eq!(
            vec![test_manufacturer("Acme", "555-100").with_id(ManufacturerId::new(1))],
            context.get_manufacturers().await
        );
    }

    #[tokio::test]
    async fn test_duplicate_phone() {
        let context = TestContext::setup().await;

        let id = context.create_manufacturer(&test_manufacturer("Acme", "555-100")).await;

        OneShotBuilder::new(context.app(), route())
            .send_json(test_manufacturer("Other", "555-100"))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_text("UNIQUE")
            .await;

        assert_eq!(
            vec![test_manufacturer("Acme", "555-100").with_id(id)],
            context.get_manufacturers().await
        );
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route());
}
