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

//! Utilities to deal with environment variables.
//!
//! Variables are named `<prefix>_<suffix>` so that a service can group all of the settings of a
//! component under a common prefix.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Result type for environment errors.
type Result<T> = std::result::Result<T, String>;

/// Reads the variable `name` and parses it as a `T`, returning `None` if it is not set.
fn get_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(format!(
                "Invalid type in environment variable {}: Invalid {}: {}",
                name,
                std::any::type_name::<T>().rsplit("::").next().unwrap_or_default(),
                e
            )),
        },
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(format!("Invalid value in environment variable {}", name))
        }
    }
}

/// Gets a required environment variable whose name is `<prefix>_<suffix>` with a conversion to
/// a target type `T`.
pub fn get_required_var<T>(prefix: &str, suffix: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let name = format!("{}_{}", prefix, suffix);
    get_var(&name)?.ok_or_else(|| format!("Required environment variable {} not present", name))
}

/// Gets an optional environment variable whose name is `<prefix>_<suffix>` with a conversion to
/// a target type `T`.
pub fn get_optional_var<T>(prefix: &str, suffix: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    get_var(&format!("{}_{}", prefix, suffix))
}
