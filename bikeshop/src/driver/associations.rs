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

//! Operations on the links between products and manufacturers.

use crate::db;
use crate::driver::{Driver, warn_if_untouched};
use crate::model::{Manufacturer, ManufacturerId, ProductId};
use iii_iv_core::driver::DriverResult;

impl Driver {
    /// Links `product` to all of the given `manufacturers`.
    ///
    /// Either all links are created or none are.
    pub(crate) async fn add_product_manufacturers(
        self,
        product: ProductId,
        manufacturers: Vec<ManufacturerId>,
    ) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        for manufacturer in manufacturers {
            db::add_product_manufacturer(tx.ex(), product, manufacturer).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// Unlinks `product` from all of the given `manufacturers`.
    ///
    /// Links that do not exist are skipped.
    pub(crate) async fn remove_product_manufacturers(
        self,
        product: ProductId,
        manufacturers: Vec<ManufacturerId>,
    ) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        for manufacturer in manufacturers {
            let rows = db::remove_product_manufacturer(tx.ex(), product, manufacturer).await?;
            warn_if_untouched(
                rows,
                &format!("Removal of manufacturer {} from product {}", manufacturer, product),
            );
        }
        tx.commit().await?;
        Ok(())
    }

    /// Gets the manufacturers linked to `product`.
    pub(crate) async fn get_product_manufacturers(
        self,
        product: ProductId,
    ) -> DriverResult<Vec<Manufacturer>> {
        let manufacturers = db::get_product_manufacturers(&mut self.db.ex().await?, product).await?;
        Ok(manufacturers)
    }
}
