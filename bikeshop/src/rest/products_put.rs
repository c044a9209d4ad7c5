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

//! API to update a product identified by the request body.

use crate::driver::Driver;
use crate::model::Product;
use axum::extract::State;
use axum::response::IntoResponse;
use iii_iv_core::rest::{JsonBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(product): JsonBody<Product>,
) -> Result<impl IntoResponse, RestError> {
    driver.update_product(product).await?;

    Ok("Product updated successfully")
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::PUT, "/products".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let id = context.create_product(&test_product("old")).await;
        let other = context.create_product(&test_product("other")).await;

        OneShotBuilder::new(context.app(), route())
            .send_json(test_product("new").with_id(id))
            .await
            .expect_text("^Product updated successfully$")
            .await;

        assert_eq!(test_product("new").with_id(id), context.get_product(id).await.unwrap());
        assert_eq!(test_product("other").with_id(other), context.get_product(other).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_is_silent() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route())
            .send_json(test_product("ghost").with_id(ProductId::new(9)))
            .await
            .expect_text("Product updated successfully")
            .await;

        assert!(context.get_products().await.is_empty());
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route());
}
