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

//! API to get all bikes.

use crate::driver::Driver;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(State(driver): State<Driver>) -> Result<impl IntoResponse, RestError> {
    let bikes = driver.get_bikes().await.map_err(|e| RestError::InternalError(e.to_string()))?;

    Ok(Json(bikes))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;
    use serde_json::json;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/bikes".to_owned())
    }

    #[tokio::test]
    async fn test_empty() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_json::<Vec<Bike>>()
            .await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_with_and_without_owner() {
        let context = TestContext::setup().await;

        let product = context.create_product(&test_product("Roadster")).await;
        let owner = context.create_customer(&test_customer("ann")).await;
        context.create_bike(product, "FN-1", Some(owner)).await;
        context.create_bike(product, "FN-2", None).await;

        let response = OneShotBuilder::new(context.app(), route())
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        assert_eq!(
            json!([
                {
                    "id": product,
                    "name": "Roadster",
                    "price": 100.0,
                    "size": null,
                    "color": null,
                    "frameNumber": "FN-1",
                    "owner": test_customer("ann").with_id(owner),
                },
                {
                    "id": product,
                    "name": "Roadster",
                    "price": 100.0,
                    "size": null,
                    "color": null,
                    "frameNumber": "FN-2",
                    "owner": null,
                },
            ]),
            response
        );
    }
}
