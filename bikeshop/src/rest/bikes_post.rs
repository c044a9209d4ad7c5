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

//! API to register a bike.

use crate::driver::Driver;
use crate::model::NewBike;
use axum::extract::State;
use axum::http;
use axum::response::IntoResponse;
use iii_iv_core::rest::{JsonBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(bike): JsonBody<NewBike>,
) -> Result<impl IntoResponse, RestError> {
    let frame_number = driver.create_bike(bike).await?;

    Ok((
        http::StatusCode::CREATED,
        format!("Bike added successfully - Frame number {}", frame_number),
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
        (http::Method::POST, "/bikes".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let product = context.create_product(&test_product("Roadster")).await;

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({
                "id": product,
                "name": "ignored",
                "price": 1.0,
                "frameNumber": "FN-42",
            }))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_text("^Bike added successfully - Frame number FN-42$")
            .await;

        let frame_number = FrameNumber::new("FN-42".to_owned());
        assert_eq!(
            Bike::new(test_product("Roadster").with_id(product), frame_number.clone(), None),
            context.get_bike(&frame_number).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_duplicate_frame_number() {
        let context = TestContext::setup().await;

        let product = context.create_product(&test_product("Roadster")).await;
        context.create_bike(product, "FN-1", None).await;

        OneShotBuilder::new(context.app(), route())
            .send_json(NewBike::new(product, FrameNumber::new("FN-1".to_owned())))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_text("UNIQUE")
            .await;

        assert_eq!(1, context.get_bikes().await.len());
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route())
            .send_json(NewBike::new(ProductId::new(3), FrameNumber::new("FN-1".to_owned())))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_text("FOREIGN KEY")
            .await;

        assert!(context.get_bikes().await.is_empty());
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route());
}
