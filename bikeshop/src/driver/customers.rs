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

//! Operations on customers.

use crate::db;
use crate::driver::{Driver, warn_if_untouched};
use crate::model::{Customer, CustomerId};
use iii_iv_core::driver::DriverResult;

impl Driver {
    /// Creates a new customer and returns its identifier.
    pub(crate) async fn create_customer(self, customer: Customer) -> DriverResult<CustomerId> {
        let id = db::create_customer(&mut self.db.ex().await?, &customer).await?;
        Ok(id)
    }

    /// Gets the customer identified by `id`.
    pub(crate) async fn get_customer(self, id: CustomerId) -> DriverResult<Customer> {
        let customer = db::get_customer(&mut self.db.ex().await?, id).await?;
        Ok(customer)
    }

    /// Gets all customers.
    pub(crate) async fn get_customers(self) -> DriverResult<Vec<Customer>> {
        let customers = db::get_customers(&mut self.db.ex().await?).await?;
        Ok(customers)
    }

    /// Replaces the customer identified by `customer.id` with `customer`.
    pub(crate) async fn update_customer(self, customer: Customer) -> DriverResult<()> {
        let rows = db::update_customer(&mut self.db.ex().await?, &customer).await?;
        warn_if_untouched(rows, &format!("Update of customer {}", customer.id()));
        Ok(())
    }

    /// Deletes the customer identified by `id`.
    pub(crate) async fn delete_customer(self, id: CustomerId) -> DriverResult<()> {
        let rows = db::delete_customer(&mut self.db.ex().await?, id).await?;
        warn_if_untouched(rows, &format!("Deletion of customer {}", id));
        Ok(())
    }
}
