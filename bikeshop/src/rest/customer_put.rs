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

//! API to update a customer identified by its path.

use crate::driver::Driver;
use crate::model::{Customer, CustomerId};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use iii_iv_core::rest::{JsonBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<CustomerId>,
    JsonBody(customer): JsonBody<Customer>,
) -> Result<impl IntoResponse, RestError> {
    driver.update_customer(customer.with_id(id)).await?;

    Ok("Customer updated successfully")
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;

    fn route(id: CustomerId) -> (http::Method, String) {
        (http::Method::PUT, format!("/customers/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let id1 = context.create_customer(&test_customer("ann")).await;
        let id2 = context.create_customer(&test_customer("bob")).await;

        OneShotBuilder::new(context.app(), route(id2))
            .send_json(test_customer("rob"))
            .await
            .expect_text("^Customer updated successfully$")
            .await;

        assert_eq!(
            vec![test_customer("ann").with_id(id1), test_customer("rob").with_id(id2)],
            context.get_customers().await
        );
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route(CustomerId::new(1)));
}
