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

//! Entry point to the REST server.

use crate::driver::Driver;
use axum::Router;
use http::HeaderValue;
use http::header::CONTENT_TYPE;
use iii_iv_core::rest::RestError;
use serde::de::DeserializeOwned;
use tower_http::set_header::SetResponseHeaderLayer;

mod bike_delete;
mod bike_get;
mod bike_owner_delete;
mod bike_owner_post;
mod bikes_get;
mod bikes_post;
mod customer_delete;
mod customer_get;
mod customer_put;
mod customers_get;
mod customers_post;
mod customers_put;
mod manufacturer_delete;
mod manufacturer_get;
mod manufacturer_put;
mod manufacturers_get;
mod manufacturers_post;
mod manufacturers_put;
mod product_delete;
mod product_get;
mod product_manufacturers_delete;
mod product_manufacturers_get;
mod product_manufacturers_post;
mod product_put;
mod products_color_get;
mod products_get;
mod products_name_get;
mod products_post;
mod products_put;
mod products_size_get;
mod root_get;
#[cfg(test)]
mod testutils;

/// Creates the router for the application.
///
/// Every response is labeled as JSON, including the plain text confirmations and error messages.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::{get, post};
    Router::new()
        .route("/", get(root_get::handler))
        .route("/bikes", get(bikes_get::handler).post(bikes_post::handler))
        .route("/bikes/:framenumber", get(bike_get::handler).delete(bike_delete::handler))
        .route(
            "/bikes/:framenumber/owner",
            post(bike_owner_post::handler).delete(bike_owner_delete::handler),
        )
        .route(
            "/customers",
            get(customers_get::handler).post(customers_post::handler).put(customers_put::handler),
        )
        .route(
            "/customers/:id",
            get(customer_get::handler).put(customer_put::handler).delete(customer_delete::handler),
        )
        .route(
            "/manufacturers",
            get(manufacturers_get::handler)
                .post(manufacturers_post::handler)
                .put(manufacturers_put::handler),
        )
        .route(
            "/manufacturers/:id",
            get(manufacturer_get::handler)
                .put(manufacturer_put::handler)
                .delete(manufacturer_delete::handler),
        )
        .route(
            "/products",
            get(products_get::handler).post(products_post::handler).put(products_put::handler),
        )
        .route("/products/color", get(products_color_get::handler))
        .route("/products/name", get(products_name_get::handler))
        .route("/products/size", get(products_size_get::handler))
        .route(
            "/products/:id",
            get(product_get::handler).put(product_put::handler).delete(product_delete::handler),
        )
        .route(
            "/products/:id/manufacturers",
            get(product_manufacturers_get::handler)
                .post(product_manufacturers_post::handler)
                .delete(product_manufacturers_delete::handler),
        )
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .with_state(driver)
}

/// Parses the JSON `body` of a product filter request.
///
/// Unlike `JsonBody`, malformed input is reported as a client error.
fn parse_filter<T: DeserializeOwned>(body: &[u8]) -> Result<T, RestError> {
    serde_json::from_slice(body).map_err(|e| RestError::InvalidRequest(e.to_string()))
}
