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

//! Database operations on products.

use crate::model::{Product, ProductFilter, ProductId};
use futures::TryStreamExt;
#[cfg(feature = "postgres")]
use iii_iv_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use iii_iv_core::db::sqlite;
use iii_iv_core::db::{DbError, DbResult, Executor};
use sqlx::Row;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;

/// Builds a product from a PostgreSQL `row` whose identifier lives in `id_column`.
#[cfg(feature = "postgres")]
pub(super) fn product_from_pg_row(row: &PgRow, id_column: &str) -> DbResult<Product> {
    let id: i32 = row.try_get(id_column).map_err(postgres::map_sqlx_error)?;
    let name: String = row.try_get("name").map_err(postgres::map_sqlx_error)?;
    let price: f64 = row.try_get("price").map_err(postgres::map_sqlx_error)?;
    let size: Option<String> = row.try_get("size").map_err(postgres::map_sqlx_error)?;
    let color: Option<String> = row.try_get("color").map_err(postgres::map_sqlx_error)?;

    Ok(Product::new(ProductId::new(id), name, price, size, color))
}

/// Builds a product from a SQLite `row` whose identifier lives in `id_column`.
#[cfg(any(feature = "sqlite", test))]
pub(super) fn product_from_sqlite_row(row: &SqliteRow, id_column: &str) -> DbResult<Product> {
    let id: i32 = row.try_get(id_column).map_err(sqlite::map_sqlx_error)?;
    let name: String = row.try_get("name").map_err(sqlite::map_sqlx_error)?;
    let price: f64 = row.try_get("price").map_err(sqlite::map_sqlx_error)?;
    let size: Option<String> = row.try_get("size").map_err(sqlite::map_sqlx_error)?;
    let color: Option<String> = row.try_get("color").map_err(sqlite::map_sqlx_error)?;

    Ok(Product::new(ProductId::new(id), name, price, size, color))
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Product {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        product_from_pg_row(&row, "id")
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Product {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        product_from_sqlite_row(&row, "id")
    }
}

/// Inserts a new `product` and returns the identifier assigned to it.  The identifier in
/// `product` is ignored.
pub(crate) async fn create_product(ex: &mut Executor, product: &Product) -> DbResult<ProductId> {
    let id: i32 = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO products (name, price, size, color)
                VALUES ($1, $2, $3, $4)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(product.name())
                .bind(product.price())
                .bind(product.size().as_deref())
                .bind(product.color().as_deref())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO products (name, price, size, color)
                VALUES (?, ?, ?, ?)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(product.name())
                .bind(product.price())
                .bind(product.size().as_deref())
                .bind(product.color().as_deref())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("id").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(ProductId::new(id))
}

/// Gets the product identified by `id`.
pub(crate) async fn get_product(ex: &mut Executor, id: ProductId) -> DbResult<Product> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM products WHERE id = $1";
            let raw_product = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Product::try_from(raw_product)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM products WHERE id = ?";
            let raw_product = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Product::try_from(raw_product)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all products.
pub(crate) async fn get_products(ex: &mut Executor) -> DbResult<Vec<Product>> {
    let mut products = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM products";
            let mut rows = sqlx::query(query_str).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                products.push(Product::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM products";
            let mut rows = sqlx::query(query_str).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                products.push(Product::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(products)
}

/// Gets all products that match `filter`.
pub(crate) async fn get_products_by(
    ex: &mut Executor,
    filter: &ProductFilter,
) -> DbResult<Vec<Product>> {
    let (column, value) = match filter {
        ProductFilter::Color(color) => ("color", color),
        ProductFilter::Name(name) => ("name", name),
        ProductFilter::Size(size) => ("size", size),
    };

    let mut products = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = format!("SELECT * FROM products WHERE {} = $1", column);
            let mut rows = sqlx::query(&query_str).bind(value).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                products.push(Product::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = format!("SELECT * FROM products WHERE {} = ?", column);
            let mut rows = sqlx::query(&query_str).bind(value).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                products.push(Product::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(products)
}

/// Replaces all fields of the product identified by `product.id` and returns the number of
/// products that were modified.
pub(crate) async fn update_product(ex: &mut Executor, product: &Product) -> DbResult<u64> {
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                UPDATE products SET name = $1, price = $2, size = $3, color = $4
                WHERE id = $5";
            sqlx::query(query_str)
                .bind(product.name())
                .bind(product.price())
                .bind(product.size().as_deref())
                .bind(product.color().as_deref())
                .bind(product.id().as_i32())
                .execute(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                UPDATE products SET name = ?, price = ?, size = ?, color = ?
                WHERE id = ?";
            sqlx::query(query_str)
                .bind(product.name())
                .bind(product.price())
                .bind(product.size().as_deref())
                .bind(product.color().as_deref())
                .bind(product.id().as_i32())
                .execute(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(done)
}

/// Deletes the product identified by `id` and returns the number of products that were deleted.
pub(crate) async fn delete_product(ex: &mut Executor, id: ProductId) -> DbResult<u64> {
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM products WHERE id = $1";
            sqlx::query(query_str)
                .bind(id.as_i32())
                .execute(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM products WHERE id = ?";
            sqlx::query(query_str)
                .bind(id.as_i32())
                .execute(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(done)
}
