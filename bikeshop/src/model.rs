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

//! High-level data types.
//!
//! All entities serialize with camelCase field names.  Identifiers assigned by the database
//! default to zero when absent from a request body, and any such value is ignored on creation.

use derive_getters::Getters;
use derive_more::{Constructor, Display, From};
use serde::{Deserialize, Serialize};

/// Identifier of a product, assigned by the database on creation.
#[derive(
    Clone, Copy, Constructor, Debug, Default, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[serde(transparent)]
pub(crate) struct ProductId(i32);

impl ProductId {
    /// Returns the raw value of the identifier for use in queries.
    pub(crate) fn as_i32(self) -> i32 {
        self.0
    }
}

/// Identifier of a manufacturer, assigned by the database on creation.
#[derive(
    Clone, Copy, Constructor, Debug, Default, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[serde(transparent)]
pub(crate) struct ManufacturerId(i32);

impl ManufacturerId {
    /// Returns the raw value of the identifier for use in queries.
    pub(crate) fn as_i32(self) -> i32 {
        self.0
    }
}

/// Identifier of a customer, assigned by the database on creation.
#[derive(
    Clone, Copy, Constructor, Debug, Default, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[serde(transparent)]
pub(crate) struct CustomerId(i32);

impl CustomerId {
    /// Returns the raw value of the identifier for use in queries.
    pub(crate) fn as_i32(self) -> i32 {
        self.0
    }
}

/// The frame number of a bike, which uniquely identifies it.
#[derive(Clone, Constructor, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct FrameNumber(String);

impl FrameNumber {
    /// Returns the frame number as a string.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

/// A product sold by the shop.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Product {
    /// Identifier of the product.
    #[serde(default)]
    id: ProductId,

    /// Display name of the product.
    name: String,

    /// Unit price.
    price: f64,

    /// Size of the product, if it has one.
    size: Option<String>,

    /// Color of the product, if it has one.
    color: Option<String>,
}

impl Product {
    /// Replaces the identifier of the product with `id`.
    pub(crate) fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }
}

/// Criteria to select a subset of the products by exact match on one of their attributes.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ProductFilter {
    /// Matches products with the given color.
    Color(String),

    /// Matches products with the given name.
    Name(String),

    /// Matches products with the given size.
    Size(String),
}

/// A company that makes products.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Manufacturer {
    /// Identifier of the manufacturer.
    #[serde(default)]
    id: ManufacturerId,

    /// Name of the manufacturer.
    name: String,

    /// Contact phone number.  No two manufacturers can share it.
    phone: String,
}

impl Manufacturer {
    /// Replaces the identifier of the manufacturer with `id`.
    pub(crate) fn with_id(mut self, id: ManufacturerId) -> Self {
        self.id = id;
        self
    }
}

/// Postal address of a customer.  All parts are optional.
#[derive(Clone, Constructor, Debug, Default, Deserialize, Getters, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Address {
    /// Street name and number.
    street: Option<String>,

    /// City name.
    city: Option<String>,

    /// Country name.
    country: Option<String>,
}

/// A customer of the shop.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Customer {
    /// Identifier of the customer.
    #[serde(default)]
    id: CustomerId,

    /// Given name.
    first_name: String,

    /// Family name.
    last_name: String,

    /// Postal address.
    #[serde(default)]
    address: Address,

    /// Contact phone number.
    phone: String,

    /// Contact email address.
    email: String,
}

impl Customer {
    /// Replaces the identifier of the customer with `id`.
    pub(crate) fn with_id(mut self, id: CustomerId) -> Self {
        self.id = id;
        self
    }
}

/// A physical bike, which is an instance of a product.
///
/// The product fields are serialized at the top level of the bike's object.
#[derive(Clone, Constructor, Debug, Deserialize, Getters, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Bike {
    /// The product this bike is an instance of.
    #[serde(flatten)]
    product: Product,

    /// Unique frame number of the bike.
    frame_number: FrameNumber,

    /// Customer that owns the bike, if it has been sold.
    #[serde(default)]
    owner: Option<Customer>,
}

/// Request to register a new bike.
///
/// Only the product identifier and the frame number matter.  Any other field of a full bike is
/// accepted and ignored.
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Constructor, Serialize))]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewBike {
    /// Identifier of the product this bike is an instance of.
    #[serde(rename = "id")]
    pub(crate) product_id: ProductId,

    /// Unique frame number of the bike.
    pub(crate) frame_number: FrameNumber,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_json_defaults_id() {
        let product: Product =
            serde_json::from_value(json!({"name": "Road bike", "price": 999.5})).unwrap();
        assert_eq!(
            Product::new(ProductId::default(), "Road bike".to_owned(), 999.5, None, None),
            product
        );
    }

    #[test]
    fn test_customer_json_is_camel_case() {
        let customer = Customer::new(
            CustomerId::new(3),
            "Jane".to_owned(),
            "Doe".to_owned(),
            Address::new(Some("Main St 1".to_owned()), None, Some("Spain".to_owned())),
            "555-1234".to_owned(),
            "jane@example.com".to_owned(),
        );
        assert_eq!(
            json!({
                "id": 3,
                "firstName": "Jane",
                "lastName": "Doe",
                "address": {"street": "Main St 1", "city": null, "country": "Spain"},
                "phone": "555-1234",
                "email": "jane@example.com",
            }),
            serde_json::to_value(&customer).unwrap()
        );
    }

    #[test]
    fn test_bike_json_flattens_product() {
        let bike = Bike::new(
            Product::new(
                ProductId::new(7),
                "Gravel".to_owned(),
                1500.0,
                Some("L".to_owned()),
                None,
            ),
            FrameNumber::new("FN-1".to_owned()),
            None,
        );
        assert_eq!(
            json!({
                "id": 7,
                "name": "Gravel",
                "price": 1500.0,
                "size": "L",
                "color": null,
                "frameNumber": "FN-1",
                "owner": null,
            }),
            serde_json::to_value(&bike).unwrap()
        );
    }

    #[test]
    fn test_new_bike_accepts_full_bike() {
        let new_bike: NewBike = serde_json::from_value(json!({
            "id": 4,
            "name": "ignored",
            "price": 1.0,
            "frameNumber": "FN-9",
            "owner": null,
        }))
        .unwrap();
        assert_eq!(ProductId::new(4), new_bike.product_id);
        assert_eq!(FrameNumber::new("FN-9".to_owned()), new_bike.frame_number);
    }
}
