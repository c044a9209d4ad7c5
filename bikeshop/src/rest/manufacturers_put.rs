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

//! API to update a manufacturer identified by the request body.

use crate::driver::Driver;
use crate::model::Manufacturer;
use axum::extract::State;
use axum::response::IntoResponse;
use iii_iv_core::rest::{JsonBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(manufacturer): JsonBody<Manufacturer>,
) -> Result<impl IntoResponse, RestError> {
    driver.update_manufacturer(manufacturer).await?;

    Ok("Manufacturer updated successfully")
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::PUT, "/manufacturers".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let id = context.create_manufacturer(&test_manufacturer("Acme", "1")).await;

        OneShotBuilder::new(context.app(), route())
            .send_json(test_manufacturer("Acme Corp", "9").with_id(id))
            .await
            .expect_text("^Manufacturer updated successfully$")
            .await;

        assert_eq!(
            test_manufacturer("Acme Corp", "9").with_id(id),
            context.get_manufacturer(id).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_phone_taken() {
        let context = TestContext::setup().await;

        let id1 = context.create_manufacturer(&test_manufacturer("Acme", "1")).await;
        context.create_manufacturer(&test_manufacturer("Bolt", "2")).await;

        OneShotBuilder::new(context.app(), route())
            .send_json(test_manufacturer("Acme", "2").with_id(id1))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_text("UNIQUE")
            .await;

        assert_eq!(
            test_manufacturer("Acme", "1").with_id(id1),
            context.get_manufacturer(id1).await.unwrap()
        );
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route());
}
