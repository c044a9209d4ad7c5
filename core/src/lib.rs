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

//! Rudimentary framework to build CRUD-style web services.
//!
//! Services built using this framework adhere to the following layered architecture, and they
//! should structure their code to have these modules as well:
//!
//! 1.  `model`: High-level data types that represent the entities of the application, with
//!     newtypes for their identifiers.  There should be no logic in here.
//!
//! 1.  `db`: The persistence layer.  Services provide free functions that take an `Executor`,
//!     issue one parameterized statement per call and map the resulting rows to model types.
//!
//! 1.  `driver`: The business logic layer.  Services provide their own `Driver` type to hold the
//!     shared database handle and to decide which operations need a transaction.
//!
//! 1.  `rest`: The HTTP layer.  Services provide an `app` function that returns the
//!     `axum::Router` for the application, backed by the `Driver` as its state.
//!
//! 1.  `main`: The app launcher.  Its sole purpose is to gather configuration data from
//!     environment variables and start the server.
//!
//! Every layer has its own result and error types, such as `DbResult` and `DbError`.  Errors
//! float to the top of the app using the `?` operator and are translated to HTTP status codes
//! once returned from the REST layer.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

pub mod db;
pub mod driver;
pub mod env;
pub mod rest;
