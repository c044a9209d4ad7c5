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

//! Operations on products.

use crate::db;
use crate::driver::{Driver, warn_if_untouched};
use crate::model::{Product, ProductFilter, ProductId};
use iii_iv_core::driver::DriverResult;

impl Driver {
    /// Creates a new product and returns its identifier.
    pub(crate) async fn create_product(self, product: Product) -> DriverResult<ProductId> {
        let id = db::create_product(&mut self.db.ex().await?, &product).await?;
        Ok(id)
    }

    /// Gets the product identified by `id`.
    pub(crate) async fn get_product(self, id: ProductId) -> DriverResult<Product> {
        let product = db::get_product(&mut self.db.ex().await?, id).await?;
        Ok(product)
    }

    /// Gets all products.
    pub(crate) async fn get_products(self) -> DriverResult<Vec<Product>> {
        let products = db::get_products(&mut self.db.ex().await?).await?;
        Ok(products)
    }

    /// Gets all products that match `filter`.
    pub(crate) async fn get_products_by(self, filter: ProductFilter) -> DriverResult<Vec<Product>> {
        let products = db::get_products_by(&mut self.db.ex().await?, &filter).await?;
        Ok(products)
    }

    /// Replaces the product identified by `product.id` with `product`.
    pub(crate) async fn update_product(self, product: Product) -> DriverResult<()> {
        let rows = db::update_product(&mut self.db.ex().await?, &product).await?;
        warn_if_untouched(rows, &format!("Update of product {}", product.id()));
        Ok(())
    }

    /// Deletes the product identified by `id`.
    pub(crate) async fn delete_product(self, id: ProductId) -> DriverResult<()> {
        let rows = db::delete_product(&mut self.db.ex().await?, id).await?;
        warn_if_untouched(rows, &format!("Deletion of product {}", id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use iii_iv_core::driver::DriverError;

    fn product(name: &str, size: Option<&str>) -> Product {
        Product::new(ProductId::default(), name.to_owned(), 10.0, size.map(str::to_owned), None)
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let context = TestContext::setup().await;

        let id = context.driver().create_product(product("Helmet", Some("M"))).await.unwrap();

        assert_eq!(
            product("Helmet", Some("M")).with_id(id),
            context.driver().get_product(id).await.unwrap()
        );
        assert_eq!(
            product("Helmet", Some("M")).with_id(id),
            db::get_product(&mut context.ex().await, id).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let context = TestContext::setup().await;

        match context.driver().get_product(ProductId::new(8)).await {
            Err(DriverError::NotFound(_)) => (),
            e => panic!("{:?}", e),
        }
    }

    #[tokio::test]
    async fn test_get_products_by_size() {
        let context = TestContext::setup().await;

        let id = context.driver().create_product(product("a", Some("S"))).await.unwrap();
        context.driver().create_product(product("b", Some("L"))).await.unwrap();
        context.driver().create_product(product("c", None)).await.unwrap();

        let products =
            context.driver().get_products_by(ProductFilter::Size("S".to_owned())).await.unwrap();
        assert_eq!(vec![product("a", Some("S")).with_id(id)], products);
    }

    #[tokio::test]
    async fn test_update_product_ok() {
        let context = TestContext::setup().await;

        let id = db::create_product(&mut context.ex().await, &product("a", None)).await.unwrap();

        context.driver().update_product(product("renamed", Some("XL")).with_id(id)).await.unwrap();

        assert_eq!(
            product("renamed", Some("XL")).with_id(id),
            db::get_product(&mut context.ex().await, id).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_product_missing_is_silent() {
        let context = TestContext::setup().await;

        let ghost = product("ghost", None).with_id(ProductId::new(77));
        context.driver().update_product(ghost).await.unwrap();
        context.driver().delete_product(ProductId::new(77)).await.unwrap();

        assert!(db::get_products(&mut context.ex().await).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_product_ok() {
        let context = TestContext::setup().await;

        let id = db::create_product(&mut context.ex().await, &product("a", None)).await.unwrap();

        context.driver().delete_product(id).await.unwrap();

        assert!(context.driver().get_products().await.unwrap().is_empty());
    }
}
