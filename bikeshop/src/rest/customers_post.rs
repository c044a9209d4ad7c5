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

//! API to create a customer.

use crate::driver::Driver;
use crate::model::Customer;
use axum::extract::State;
use axum::http;
use axum::response::IntoResponse;
use iii_iv_core::rest::{JsonBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(customer): JsonBody<Customer>,
) -> Result<impl IntoResponse, RestError> {
    let id = driver.create_customer(customer).await?;

    Ok((http::StatusCode::CREATED, format!("Customer created successfully - Customer Id: {}", id)))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use iii_iv_core::rest::testutils::*;
    use serde_json::json;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/customers".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({
                "firstName": "Ada",
                "lastName": "Byron",
                "address": {"street": "Bike Ln 2", "city": "London", "country": "UK"},
                "phone": "555-1",
                "email": "ada@example.com",
            }))
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_text("^Customer created successfully - Customer Id: 1$")
            .await;

        let exp = Customer::new(
            CustomerId::new(1),
            "Ada".to_owned(),
            "Byron".to_owned(),
            Address::new(
                Some("Bike Ln 2".to_owned()),
                Some("London".to_owned()),
                Some("UK".to_owned()),
            ),
            "555-1".to_owned(),
            "ada@example.com".to_owned(),
        );
        assert_eq!(vec![exp], context.get_customers().await);
    }

    #[tokio::test]
    async fn test_address_is_optional() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({
                "firstName": "Bo",
                "lastName": "Lee",
                "phone": "555-2",
                "email": "bo@example.com",
            }))
            .await
            .expect_status(http::StatusCode::CREATED)
            .take_body_as_text()
            .await;

        let customers = context.get_customers().await;
        assert_eq!(1, customers.len());
        assert_eq!(&Address::default(), customers[0].address());
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({"firstName": "Bo"}))
            .await
            .expect_status(http::StatusCode::INTERNAL_SERVER_ERROR)
            .expect_text("missing field")
            .await;

        assert!(context.get_customers().await.is_empty());
    }

    test_payload_must_be_json!(TestContext::setup().await.into_app(), route());
}
