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

//! API to delete a customer.

use crate::driver::Driver;
use crate::model::CustomerId;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<CustomerId>,
) -> Result<impl IntoResponse, RestError> {
    driver.delete_customer(id).await?;

    Ok(format!("Customer deleted successfully - Customer Id: {}", id))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::db::DbError;
    use iii_iv_core::rest::testutils::*;

    fn route(id: CustomerId) -> (http::Method, String) {
        (http::Method::DELETE, format!("/customers/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let id = context.create_customer(&test_customer("ann")).await;

        OneShotBuilder::new(context.app(), route(id))
            .send_empty()
            .await
            .expect_text(&format!("^Customer deleted successfully - Customer Id: {}$", id))
            .await;

        assert!(matches!(context.get_customer(id).await, Err(DbError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_owner_of_bike() {
        let context = TestContext::setup().await;

        let product = context.create_product(&test_product("frame")).await;
        let id = context.create_customer(&test_customer("ann")).await;
        context.create_bike(product, "FN-1", Some(id)).await;

        OneShotBuilder::new(context.app(), route(id))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .take_body_as_text()
            .await;

        assert!(context.get_customer(id).await.is_ok());
    }
}
