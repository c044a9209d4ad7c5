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

//! API to assign an owner to a bike.

use crate::driver::Driver;
use crate::model::{CustomerId, FrameNumber};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use iii_iv_core::rest::{JsonBody, RestError};
use serde::Deserialize;

/// Message sent to the server to assign an owner to a bike.
#[derive(Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub(crate) struct OwnerRequest {
    /// Identifier of the customer that becomes the owner.
    owner: CustomerId,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(frame_number): Path<FrameNumber>,
    JsonBody(request): JsonBody<OwnerRequest>,
) -> Result<impl IntoResponse, RestError> {
    let message =
        format!("Owner successfully added - Owner {} | Bike {}", request.owner, frame_number);
    driver.add_owner(frame_number, request.owner).await?;

    Ok(message)
}
