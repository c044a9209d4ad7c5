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

//! Operations on manufacturers.

use crate::db;
use crate::driver::{Driver, warn_if_untouched};
use crate::model::{Manufacturer, ManufacturerId};
use iii_iv_core::driver::DriverResult;

impl Driver {
    /// Creates a new manufacturer and returns its identifier.
    pub(crate) async fn create_manufacturer(
        self,
        manufacturer: Manufacturer,
    ) -> DriverResult<ManufacturerId> {
        let id = db::create_manufacturer(&mut self.db.ex().await?, &manufacturer).await?;
        Ok(id)
    }

    /// Gets the manufacturer identified by `id`.
    pub(crate) async fn get_manufacturer(self, id: ManufacturerId) -> DriverResult<Manufacturer> {
        let manufacturer = db::get_manufacturer(&mut self.db.ex().await?, id).await?;
        Ok(manufacturer)
    }

    /// Gets all manufacturers.
    pub(crate) async fn get_manufacturers(self) -> DriverResult<Vec<Manufacturer>> {
        let manufacturers = db::get_manufacturers(&mut self.db.ex().await?).await?;
        Ok(manufacturers)
    }

    /// Replaces the manufacturer identified by `manufacturer.id` with `manufacturer`.
    pub(crate) async fn update_manufacturer(self, manufacturer: Manufacturer) -> DriverResult<()> {
        let rows = db::update_manufacturer(&mut self.db.ex().await?, &manufacturer).await?;
        warn_if_untouched(rows, &format!("Update of manufacturer {}", manufacturer.id()));
        Ok(())
    }

    /// Deletes the manufacturer identified by `id`.
    pub(crate) async fn delete_manufacturer(self, id: ManufacturerId) -> DriverResult<()> {
        let rows = db::delete_manufacturer(&mut self.db.ex().await?, id).await?;
        warn_if_untouched(rows, &format!("Deletion of manufacturer {}", id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use iii_iv_core::driver::DriverError;

    fn manufacturer(name: &str, phone: &str) -> Manufacturer {
        Manufacturer::new(ManufacturerId::default(), name.to_owned(), phone.to_owned())
    }

    #[tokio::test]
    async fn test_create_manufacturer_ok() {
        let context = TestContext::setup().await;

        let id = context.driver().create_manufacturer(manufacturer("Acme", "1")).await.unwrap();

        assert_eq!(
            manufacturer("Acme", "1").with_id(id),
            db::get_manufacturer(&mut context.ex().await, id).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_create_manufacturer_duplicate_phone() {
        let context = TestContext::setup().await;

        context.driver().create_manufacturer(manufacturer("Acme", "1")).await.unwrap();
        match context.driver().create_manufacturer(manufacturer("Other", "1")).await {
            Err(DriverError::AlreadyExists(msg)) => assert!(msg.contains("phone")),
            e => panic!("{:?}", e),
        }
    }

    #[tokio::test]
    async fn test_get_manufacturers_some() {
        let context = TestContext::setup().await;

        let id1 = db::create_manufacturer(&mut context.ex().await, &manufacturer("A", "1"))
            .await
            .unwrap();
        let id2 = db::create_manufacturer(&mut context.ex().await, &manufacturer("B", "2"))
            .await
            .unwrap();

        assert_eq!(
            vec![manufacturer("A", "1").with_id(id1), manufacturer("B", "2").with_id(id2)],
            context.driver().get_manufacturers().await.unwrap()
        );
        assert_eq!(
            manufacturer("B", "2").with_id(id2),
            context.driver().get_manufacturer(id2).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_manufacturer() {
        let context = TestContext::setup().await;

        let id = db::create_manufacturer(&mut context.ex().await, &manufacturer("A", "1"))
            .await
            .unwrap();

        context.driver().update_manufacturer(manufacturer("Z", "9").with_id(id)).await.unwrap();
        assert_eq!(
            manufacturer("Z", "9").with_id(id),
            context.driver().get_manufacturer(id).await.unwrap()
        );

        context.driver().delete_manufacturer(id).await.unwrap();
        context.driver().delete_manufacturer(id).await.unwrap();
        assert!(context.driver().get_manufacturers().await.unwrap().is_empty());
    }
}
