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

//! API to get the products that have a given color.

use crate::driver::Driver;
use crate::model::ProductFilter;
use crate::rest::parse_filter;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use iii_iv_core::rest::RestError;
use serde::Deserialize;

/// Message sent to the server to select products by color.
#[derive(Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub(crate) struct ColorRequest {
    /// The color to match exactly.
    color: String,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    body: Bytes,
) -> Result<impl IntoResponse, RestError> {
    let request: ColorRequest = parse_filter(&body)?;
    let products = driver
        .get_products_by(ProductFilter::Color(request.color))
        .await
        .map_err(|e| RestError::InternalError(e.to_string()))?;

    Ok(Json(products))
}
