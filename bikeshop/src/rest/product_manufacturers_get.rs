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

//! API to get the manufacturers of a product.

use crate::driver::Driver;
use crate::model::ProductId;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse, RestError> {
    let manufacturers = driver
        .get_product_manufacturers(id)
        .await
        .map_err(|e| RestError::InternalError(e.to_string()))?;

    Ok(Json(manufacturers))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;

    fn route(id: ProductId) -> (http::Method, String) {
        (http::Method::GET, format!("/products/{}/manufacturers", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let product = context.create_product(&test_product("frame")).await;
        let other = context.create_product(&test_product("other")).await;
        let m1 = context.create_manufacturer(&test_manufacturer("Acme", "111")).await;
        let m2 = context.create_manufacturer(&test_manufacturer("Bolt", "222")).await;
        let m3 = context.create_manufacturer(&test_manufacturer("Cog", "333")).await;
        context.link(product, m3).await;
        context.link(product, m1).await;
        context.link(other, m2).await;

        let response = OneShotBuilder::new(context.app(), route(product))
            .send_empty()
            .await
            .expect_json::<Vec<Manufacturer>>()
            .await;
        assert_eq!(
            vec![
                test_manufacturer("Acme", "111").with_id(m1),
                test_manufacturer("Cog", "333").with_id(m3),
            ],
            response
        );
    }

    #[tokio::test]
    async fn test_unknown_product_is_empty() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.app(), route(ProductId::new(8)))
            .send_empty()
            .await
            .expect_json::<Vec<Manufacturer>>()
            .await;
        assert!(response.is_empty());
    }
}
