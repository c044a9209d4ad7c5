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

//! Database operations on manufacturers.

use crate::model::{Manufacturer, ManufacturerId};
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

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Manufacturer {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(postgres::map_sqlx_error)?;
        let phone: String = row.try_get("phone").map_err(postgres::map_sqlx_error)?;
        Ok(Manufacturer::new(ManufacturerId::new(id), name, phone))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Manufacturer {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(sqlite::map_sqlx_error)?;
        let phone: String = row.try_get("phone").map_err(sqlite::map_sqlx_error)?;
        Ok(Manufacturer::new(ManufacturerId::new(id), name, phone))
    }
}

/// Inserts a new `manufacturer` and returns the identifier assigned to it.
///
/// Fails with `AlreadyExists` if another manufacturer has the same phone number.
pub(crate) async fn create_manufacturer(
    ex: &mut Executor,
    manufacturer: &Manufacturer,
) -> DbResult<ManufacturerId> {
    let id: i32 = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "INSERT INTO manufacturers (name, phone) VALUES ($1, $2) RETURNING id";
            let row = sqlx::query(query_str)
                .bind(manufacturer.name())
                .bind(manufacturer.phone())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO manufacturers (name, phone) VALUES (?, ?) RETURNING id";
            let row = sqlx::query(query_str)
                .bind(manufacturer.name())
                .bind(manufacturer.phone())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("id").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(ManufacturerId::new(id))
}

/// Gets the manufacturer identified by `id`.
pub(crate) async fn get_manufacturer(
    ex: &mut Executor,
    id: ManufacturerId,
) -> DbResult<Manufacturer> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let raw = sqlx::query("SELECT * FROM manufacturers WHERE id = $1")
                .bind(id.as_i32())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Manufacturer::try_from(raw)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let raw = sqlx::query("SELECT * FROM manufacturers WHERE id = ?")
                .bind(id.as_i32())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Manufacturer::try_from(raw)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all manufacturers.
pub(crate) async fn get_manufacturers(ex: &mut Executor) -> DbResult<Vec<Manufacturer>> {
    let mut manufacturers = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut rows = sqlx::query("SELECT * FROM manufacturers").fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                manufacturers.push(Manufacturer::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut rows = sqlx::query("SELECT * FROM manufacturers").fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                manufacturers.push(Manufacturer::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(manufacturers)
}

/// Replaces all fields of the manufacturer identified by `manufacturer.id` and returns the
/// number of manufacturers that were modified.
pub(crate) async fn update_manufacturer(
    ex: &mut Executor,
    manufacturer: &Manufacturer,
) -> DbResult<u64> {
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "UPDATE manufacturers SET name = $1, phone = $2 WHERE id = $3";
            sqlx::query(query_str)
                .bind(manufacturer.name())
                .bind(manufacturer.phone())
                .bind(manufacturer.id().as_i32())
                .execute(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "UPDATE manufacturers SET name = ?, phone = ? WHERE id = ?";
            sqlx::query(query_str)
                .bind(manufacturer.name())
                .bind(manufacturer.phone())
                .bind(manufacturer.id().as_i32())
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

/// Deletes the manufacturer identified by `id` and returns the number of manufacturers that
/// were deleted.
pub(crate) async fn delete_manufacturer(ex: &mut Executor, id: ManufacturerId) -> DbResult<u64> {
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => sqlx::query("DELETE FROM manufacturers WHERE id = $1")
            .bind(id.as_i32())
            .execute(&mut **ex)
            .await
            .map_err(postgres::map_sqlx_error)?
            .rows_affected(),

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlx::query("DELETE FROM manufacturers WHERE id = ?")
            .bind(id.as_i32())
            .execute(&mut **ex)
            .await
            .map_err(sqlite::map_sqlx_error)?
            .rows_affected(),

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(done)
}
