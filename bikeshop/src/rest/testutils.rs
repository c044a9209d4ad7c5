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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use crate::rest::app;
use axum::Router;
use iii_iv_core::db::{Db, DbResult};
use std::sync::Arc;

/// Builds a product named `name` with no optional attributes.
pub(crate) fn test_product(name: &str) -> Product {
    Product::new(ProductId::default(), name.to_owned(), 100.0, None, None)
}

/// Builds a manufacturer named `name` with a `phone` number.
pub(crate) fn test_manufacturer(name: &str, phone: &str) -> Manufacturer {
    Manufacturer::new(ManufacturerId::default(), name.to_owned(), phone.to_owned())
}

/// Builds a customer whose details derive from `name`.
pub(crate) fn test_customer(name: &str) -> Customer {
    Customer::new(
        CustomerId::default(),
        name.to_owned(),
        "Tester".to_owned(),
        Address::new(Some("1 Test Rd".to_owned()), Some("Testville".to_owned()), None),
        "555-0000".to_owned(),
        format!("{}@example.com", name),
    )
}

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the app, for direct access.
    db: Arc<dyn Db + Send + Sync>,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app backed by an in-memory database with the schema loaded.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(iii_iv_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        let app = app(driver);
        Self { db, app }
    }

    /// Gets a copy of the app under test.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app under test.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Inserts `product` directly into the database.
    pub(crate) async fn create_product(&self, product: &Product) -> ProductId {
        db::create_product(&mut self.db.ex().await.unwrap(), product).await.unwrap()
    }

    /// Reads the product `id` directly from the database.
    pub(crate) async fn get_product(&self, id: ProductId) -> DbResult<Product> {
        db::get_product(&mut self.db.ex().await.unwrap(), id).await
    }

    /// Reads all products directly from the database.
    pub(crate) async fn get_products(&self) -> Vec<Product> {
        db::get_products(&mut self.db.ex().await.unwrap()).await.unwrap()
    }

    /// Inserts `manufacturer` directly into the database.
    pub(crate) async fn create_manufacturer(&self, manufacturer: &Manufacturer) -> ManufacturerId {
        db::create_manufacturer(&mut self.db.ex().await.unwrap(), manufacturer).await.unwrap()
    }

    /// Reads the manufacturer `id` directly from the database.
    pub(crate) async fn get_manufacturer(&self, id: ManufacturerId) -> DbResult<Manufacturer> {
        db::get_manufacturer(&mut self.db.ex().await.unwrap(), id).await
    }

    /// Reads all manufacturers directly from the database.
    pub(crate) async fn get_manufacturers(&self) -> Vec<Manufacturer> {
        db::get_manufacturers(&mut self.db.ex().await.unwrap()).await.unwrap()
    }

    /// Inserts `customer` directly into the database.
    pub(crate) async fn create_customer(&self, customer: &Customer) -> CustomerId {
        db::create_customer(&mut self.db.ex().await.unwrap(), customer).await.unwrap()
    }

    /// Reads the customer `id` directly from the database.
    pub(crate) async fn get_customer(&self, id: CustomerId) -> DbResult<Customer> {
        db::get_customer(&mut self.db.ex().await.unwrap(), id).await
    }

    /// Reads all customers directly from the database.
    pub(crate) async fn get_customers(&self) -> Vec<Customer> {
        db::get_customers(&mut self.db.ex().await.unwrap()).await.unwrap()
    }

    /// Links `product` to `manufacturer`.
    pub(crate) async fn link(&self, product: ProductId, manufacturer: ManufacturerId) {
        db::add_product_manufacturer(&mut self.db.ex().await.unwrap(), product, manufacturer)
            .await
            .unwrap()
    }

    /// Gets the identifiers of the manufacturers linked to `product`.
    pub(crate) async fn linked(&self, product: ProductId) -> Vec<ManufacturerId> {
        db::get_product_manufacturers(&mut self.db.ex().await.unwrap(), product)
            .await
            .unwrap()
            .iter()
            .map(|m| *m.id())
            .collect()
    }

    /// Registers a bike for `product` with `frame_number` and, optionally, an `owner`.
    pub(crate) async fn create_bike(
        &self,
        product: ProductId,
        frame_number: &str,
        owner: Option<CustomerId>,
    ) -> FrameNumber {
        let frame_number = FrameNumber::new(frame_number.to_owned());
        let bike = NewBike::new(product, frame_number.clone());
        db::create_bike(&mut self.db.ex().await.unwrap(), &bike).await.unwrap();
        if let Some(owner) = owner {
            db::add_owner(&mut self.db.ex().await.unwrap(), &frame_number, owner).await.unwrap();
        }
        frame_number
    }

    /// Reads the bike `frame_number` directly from the database.
    pub(crate) async fn get_bike(&self, frame_number: &FrameNumber) -> DbResult<Bike> {
        db::get_bike(&mut self.db.ex().await.unwrap(), frame_number).await
    }

    /// Reads all bikes directly from the database.
    pub(crate) async fn get_bikes(&self) -> Vec<Bike> {
        db::get_bikes(&mut self.db.ex().await.unwrap()).await.unwrap()
    }
}
