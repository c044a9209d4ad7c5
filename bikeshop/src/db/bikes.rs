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

//! Database operations on bikes and their owners.

#[cfg(feature = "postgres")]
use super::customers::customer_from_pg_row;
#[cfg(any(feature = "sqlite", test))]
use super::customers::customer_from_sqlite_row;
#[cfg(feature = "postgres")]
use super::products::product_from_pg_row;
#[cfg(any(feature = "sqlite", test))]
use super::products::product_from_sqlite_row;
use crate::model::{Bike, CustomerId, FrameNumber, NewBike};
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

/// Query to fetch bikes along with their product and owner details.  Callers append their own
/// filtering clauses.
const SELECT_BIKES: &str = "
    SELECT
        b.frame_number, b.product_id, p.name, p.price, p.size, p.color,
        c.id AS owner_id, c.first_name, c.last_name, c.phone, c.email, c.street, c.city, c.country
    FROM bikes b
        JOIN products p ON b.product_id = p.id
        LEFT JOIN customers c ON b.owner = c.id";

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Bike {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let frame_number: String = row.try_get("frame_number").map_err(postgres::map_sqlx_error)?;
        let owner_id: Option<i32> = row.try_get("owner_id").map_err(postgres::map_sqlx_error)?;

        let product = product_from_pg_row(&row, "product_id")?;
        let owner = match owner_id {
            Some(_) => Some(customer_from_pg_row(&row, "owner_id")?),
            None => None,
        };
        Ok(Bike::new(product, FrameNumber::new(frame_number), owner))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Bike {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let frame_number: String = row.try_get("frame_number").map_err(sqlite::map_sqlx_error)?;
        let owner_id: Option<i32> = row.try_get("owner_id").map_err(sqlite::map_sqlx_error)?;

        let product = product_from_sqlite_row(&row, "product_id")?;
        let owner = match owner_id {
            Some(_) => Some(customer_from_sqlite_row(&row, "owner_id")?),
            None => None,
        };
        Ok(Bike::new(product, FrameNumber::new(frame_number), owner))
    }
}

/// Registers a new bike and returns its frame number.  The bike starts without an owner.
///
/// Fails with `AlreadyExists` if the frame number is taken and with `NotFound` if the product
/// does not exist.
pub(crate) async fn create_bike(ex: &mut Executor, bike: &NewBike) -> DbResult<FrameNumber> {
    let frame_number: String = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO bikes (product_id, frame_number) VALUES ($1, $2)
                RETURNING frame_number";
            let row = sqlx::query(query_str)
                .bind(bike.product_id.as_i32())
                .bind(bike.frame_number.as_str())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("frame_number").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO bikes (product_id, frame_number) VALUES (?, ?)
                RETURNING frame_number";
            let row = sqlx::query(query_str)
                .bind(bike.product_id.as_i32())
                .bind(bike.frame_number.as_str())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("frame_number").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(FrameNumber::new(frame_number))
}

/// Gets the bike identified by `frame_number`.
pub(crate) async fn get_bike(ex: &mut Executor, frame_number: &FrameNumber) -> DbResult<Bike> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = format!("{} WHERE b.frame_number = $1", SELECT_BIKES);
            let raw_bike = sqlx::query(&query_str)
                .bind(frame_number.as_str())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Bike::try_from(raw_bike)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = format!("{} WHERE b.frame_number = ?", SELECT_BIKES);
            let raw_bike = sqlx::query(&query_str)
                .bind(frame_number.as_str())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Bike::try_from(raw_bike)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all bikes.
pub(crate) async fn get_bikes(ex: &mut Executor) -> DbResult<Vec<Bike>> {
    let mut bikes = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut rows = sqlx::query(SELECT_BIKES).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                bikes.push(Bike::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut rows = sqlx::query(SELECT_BIKES).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                bikes.push(Bike::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(bikes)
}

/// Deletes the bike identified by `frame_number` and returns the number of bikes that were
/// deleted.
pub(crate) async fn delete_bike(ex: &mut Executor, frame_number: &FrameNumber) -> DbResult<u64> {
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => sqlx::query("DELETE FROM bikes WHERE frame_number = $1")
            .bind(frame_number.as_str())
            .execute(&mut **ex)
            .await
            .map_err(postgres::map_sqlx_error)?
            .rows_affected(),

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlx::query("DELETE FROM bikes WHERE frame_number = ?")
            .bind(frame_number.as_str())
            .execute(&mut **ex)
            .await
            .map_err(sqlite::map_sqlx_error)?
            .rows_affected(),

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(done)
}

/// Sets the owner of the bike `frame_number` to `owner`, replacing any previous owner, and
/// returns the number of bikes that were modified.
///
/// Fails with `NotFound` if the customer does not exist.
pub(crate) async fn add_owner(
    ex: &mut Executor,
    frame_number: &FrameNumber,
    owner: CustomerId,
) -> DbResult<u64> {
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => sqlx::query("UPDATE bikes SET owner = $1 WHERE frame_number = $2")
            .bind(owner.as_i32())
            .bind(frame_number.as_str())
            .execute(&mut **ex)
            .await
            .map_err(postgres::map_sqlx_error)?
            .rows_affected(),

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlx::query("UPDATE bikes SET owner = ? WHERE frame_number = ?")
            .bind(owner.as_i32())
            .bind(frame_number.as_str())
            .execute(&mut **ex)
            .await
            .map_err(sqlite::map_sqlx_error)?
            .rows_affected(),

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(done)
}

/// Clears the owner of the bike `frame_number` and returns the number of bikes that were
/// modified.
pub(crate) async fn remove_owner(ex: &mut Executor, frame_number: &FrameNumber) -> DbResult<u64> {
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            sqlx::query("UPDATE bikes SET owner = NULL WHERE frame_number = $1")
                .bind(frame_number.as_str())
                .execute(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlx::query("UPDATE bikes SET owner = NULL WHERE frame_number = ?")
            .bind(frame_number.as_str())
            .execute(&mut **ex)
            .await
            .map_err(sqlite::map_sqlx_error)?
            .rows_affected(),

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(done)
}
