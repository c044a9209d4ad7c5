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

//! API to delete a product.

use crate::driver::Driver;
use crate::model::ProductId;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse, RestError> {
    driver.delete_product(id).await?;

    Ok(format!("Product deleted successfully - Product Id: {}", id))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::db::DbError;
    use iii_iv_core::rest::testutils::*;

    fn route(id: ProductId) -> (http::Method, String) {
        (http::Method::DELETE, format!("/products/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let id1 = context.create_product(&test_product("first")).await;
        let id2 = context.create_product(&test_product("second")).await;

        OneShotBuilder::new(context.app(), route(id1))
            .send_empty()
            .await
            .expect_text(&format!("^Product deleted successfully - Product Id: {}$", id1))
            .await;

        assert!(matches!(context.get_product(id1).await, Err(DbError::NotFound(_))));
        assert_eq!(test_product("second").with_id(id2), context.get_product(id2).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_is_silent() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route(ProductId::new(5)))
            .send_empty()
            .await
            .expect_text("Product Id: 5")
            .await;
    }

    #[tokio::test]
    async fn test_referenced_by_bike() {
        let context = TestContext::setup().await;

        let id = context.create_product(&test_product("frame")).await;
        context.create_bike(id, "FN-1", None).await;

        OneShotBuilder::new(context.app(), route(id))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .take_body_as_text()
            .await;

        assert!(context.get_product(id).await.is_ok());
    }
}
