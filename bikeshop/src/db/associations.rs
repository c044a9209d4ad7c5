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

//! Database operations on the links between products and their manufacturers.

use crate::model::{Manufacturer, ManufacturerId, ProductId};
use futures::TryStreamExt;
#[cfg(feature = "postgres")]
use iii_iv_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use iii_iv_core::db::sqlite;
use iii_iv_core::db::{DbError, DbResult, Executor};

/// Links the product `product_id` to the manufacturer `manufacturer_id`.
///
/// Fails with `NotFound` if either side does not exist and with `AlreadyExists` if the link is
/// already present.
pub(crate) async fn add_product_manufacturer(
    ex: &mut Executor,
    product_id: ProductId,
    manufacturer_id: ManufacturerId,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO products_manufacturers (product_id, manufacturer_id)
                VALUES ($1, $2)";
            sqlx::query(query_str)
                .bind(product_id.as_i32())
                .bind(manufacturer_id.as_i32())
                .execute(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO products_manufacturers (product_id, manufacturer_id)
                VALUES (?, ?)";
            sqlx::query(query_str)
                .bind(product_id.as_i32())
                .bind(manufacturer_id.as_i32())
                .execute(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?
                .rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    if rows_affected != 1 {
        return Err(DbError::BackendError("Insertion did not affect exactly one row".to_owned()));
    }
    Ok(())
}

/// Unlinks the product `product_id` from the manufacturer `manufacturer_id` and returns the
/// number of links that were removed.
pub(crate) async fn remove_product_manufacturer(
    ex: &mut Executor,
    product_id: ProductId,
    manufacturer_id: ManufacturerId,
) -> DbResult<u64> {
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                DELETE FROM products_manufacturers
                WHERE product_id = $1 AND manufacturer_id = $2";
            sqlx::query(query_str)
                .bind(product_id.as_i32())
                .bind(manufacturer_id.as_i32())
                .execute(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                DELETE FROM products_manufacturers
                WHERE product_id = ? AND manufacturer_id = ?";
            sqlx::query(query_str)
                .bind(product_id.as_i32())
                .bind(manufacturer_id.as_i32())
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

/// Gets the manufacturers linked to the product `product_id`, sorted by their identifier.
pub(crate) async fn get_product_manufacturers(
    ex: &mut Executor,
    product_id: ProductId,
) -> DbResult<Vec<Manufacturer>> {
    let mut manufacturers = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT m.id, m.name, m.phone
                FROM products_manufacturers pm
                    JOIN manufacturers m ON pm.manufacturer_id = m.id
                WHERE pm.product_id = $1
                ORDER BY m.id";
            let mut rows = sqlx::query(query_str).bind(product_id.as_i32()).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                manufacturers.push(Manufacturer::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT m.id, m.name, m.phone
                FROM products_manufacturers pm
                    JOIN manufacturers m ON pm.manufacturer_id = m.id
                WHERE pm.product_id = ?
                ORDER BY m.id";
            let mut rows = sqlx::query(query_str).bind(product_id.as_i32()).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                manufacturers.push(Manufacturer::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(manufacturers)
}
