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

//! Database operations on customers.

use crate::model::{Address, Customer, CustomerId};
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

/// Builds a customer from a PostgreSQL `row` whose identifier lives in `id_column`.
#[cfg(feature = "postgres")]
pub(super) fn customer_from_pg_row(row: &PgRow, id_column: &str) -> DbResult<Customer> {
    let id: i32 = row.try_get(id_column).map_err(postgres::map_sqlx_error)?;
    let first_name: String = row.try_get("first_name").map_err(postgres::map_sqlx_error)?;
    let last_name: String = row.try_get("last_name").map_err(postgres::map_sqlx_error)?;
    let phone: String = row.try_get("phone").map_err(postgres::map_sqlx_error)?;
    let email: String = row.try_get("email").map_err(postgres::map_sqlx_error)?;
    let street: Option<String> = row.try_get("street").map_err(postgres::map_sqlx_error)?;
    let city: Option<String> = row.try_get("city").map_err(postgres::map_sqlx_error)?;
    let country: Option<String> = row.try_get("country").map_err(postgres::map_sqlx_error)?;

    let address = Address::new(street, city, country);
    Ok(Customer::new(CustomerId::new(id), first_name, last_name, address, phone, email))
}

/// Builds a customer from a SQLite `row` whose identifier lives in `id_column`.
#[cfg(any(feature = "sqlite", test))]
pub(super) fn customer_from_sqlite_row(row: &SqliteRow, id_column: &str) -> DbResult<Customer> {
    let id: i32 = row.try_get(id_column).map_err(sqlite::map_sqlx_error)?;
    let first_name: String = row.try_get("first_name").map_err(sqlite::map_sqlx_error)?;
    let last_name: String = row.try_get("last_name").map_err(sqlite::map_sqlx_error)?;
    let phone: String = row.try_get("phone").map_err(sqlite::map_sqlx_error)?;
    let email: String = row.try_get("email").map_err(sqlite::map_sqlx_error)?;
    let street: Option<String> = row.try_get("street").map_err(sqlite::map_sqlx_error)?;
    let city: Option<String> = row.try_get("city").map_err(sqlite::map_sqlx_error)?;
    let country: Option<String> = row.try_get("country").map_err(sqlite::map_sqlx_error)?;

    let address = Address::new(street, city, country);
    Ok(Customer::new(CustomerId::new(id), first_name, last_name, address, phone, email))
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Customer {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        customer_from_pg_row(&row, "id")
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Customer {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        customer_from_sqlite_row(&row, "id")
    }
}

/// Inserts a new `customer` and returns the identifier assigned to it.  The identifier in
/// `customer` is ignored.
pub(crate) async fn create_customer(
    ex: &mut Executor,
    customer: &Customer,
) -> DbResult<CustomerId> {
    let address = customer.address();
    let id: i32 = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO customers
                    (first_name, last_name, phone, email, street, city, country)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(customer.first_name())
                .bind(customer.last_name())
                .bind(customer.phone())
                .bind(customer.email())
                .bind(address.street().as_deref())
                .bind(address.city().as_deref())
                .bind(address.country().as_deref())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO customers
                    (first_name, last_name, phone, email, street, city, country)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(customer.first_name())
                .bind(customer.last_name())
                .bind(customer.phone())
                .bind(customer.email())
                .bind(address.street().as_deref())
                .bind(address.city().as_deref())
                .bind(address.country().as_deref())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("id").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(CustomerId::new(id))
}

/// Gets the customer identified by `id`.
pub(crate) async fn get_customer(ex: &mut Executor, id: CustomerId) -> DbResult<Customer> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM customers WHERE id = $1";
            let raw_customer = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Customer::try_from(raw_customer)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM customers WHERE id = ?";
            let raw_customer = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Customer::try_from(raw_customer)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all customers.
pub(crate) async fn get_customers(ex: &mut Executor) -> DbResult<Vec<Customer>> {
    let mut customers = vec![];
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let mut rows = sqlx::query("SELECT * FROM customers").fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                customers.push(Customer::try_from(row)?);
            }
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let mut rows = sqlx::query("SELECT * FROM customers").fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                customers.push(Customer::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(customers)
}

/// Replaces all fields of the customer identified by `customer.id` and returns the number of
/// customers that were modified.
pub(crate) async fn update_customer(ex: &mut Executor, customer: &Customer) -> DbResult<u64> {
    let address = customer.address();
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                UPDATE customers SET
                    first_name = $1, last_name = $2, phone = $3, email = $4,
                    street = $5, city = $6, country = $7
                WHERE id = $8";
            sqlx::query(query_str)
                .bind(customer.first_name())
                .bind(customer.last_name())
                .bind(customer.phone())
                .bind(customer.email())
                .bind(address.street().as_deref())
                .bind(address.city().as_deref())
                .bind(address.country().as_deref())
                .bind(customer.id().as_i32())
                .execute(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?
                .rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                UPDATE customers SET
                    first_name = ?, last_name = ?, phone = ?, email = ?,
                    street = ?, city = ?, country = ?
                WHERE id = ?";
            sqlx::query(query_str)
                .bind(customer.first_name())
                .bind(customer.last_name())
                .bind(customer.phone())
                .bind(customer.email())
                .bind(address.street().as_deref())
                .bind(address.city().as_deref())
                .bind(address.country().as_deref())
                .bind(customer.id().as_i32())
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

/// Deletes the customer identified by `id` and returns the number of customers that were
/// deleted.
pub(crate) async fn delete_customer(ex: &mut Executor, id: CustomerId) -> DbResult<u64> {
    let done = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.as_i32())
            .execute(&mut **ex)
            .await
            .map_err(postgres::map_sqlx_error)?
            .rows_affected(),

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlx::query("DELETE FROM customers WHERE id = ?")
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
