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

//! Operations on bikes and their owners.

use crate::db;
use crate::driver::{Driver, warn_if_untouched};
use crate::model::{Bike, CustomerId, FrameNumber, NewBike};
use iii_iv_core::driver::DriverResult;

impl Driver {
    /// Registers a new bike without an owner and returns its frame number.
    pub(crate) async fn create_bike(self, bike: NewBike) -> DriverResult<FrameNumber> {
        let frame_number = db::create_bike(&mut self.db.ex().await?, &bike).await?;
        Ok(frame_number)
    }

    /// Gets the bike identified by `frame_number`.
    pub(crate) async fn get_bike(self, frame_number: FrameNumber) -> DriverResult<Bike> {
        let bike = db::get_bike(&mut self.db.ex().await?, &frame_number).await?;
        Ok(bike)
    }

    /// Gets all bikes.
    pub(crate) async fn get_bikes(self) -> DriverResult<Vec<Bike>> {
        let bikes = db::get_bikes(&mut self.db.ex().await?).await?;
        Ok(bikes)
    }

    /// Deletes the bike identified by `frame_number`.
    pub(crate) async fn delete_bike(self, frame_number: FrameNumber) -> DriverResult<()> {
        let rows = db::delete_bike(&mut self.db.ex().await?, &frame_number).await?;
        warn_if_untouched(rows, &format!("Deletion of bike {}", frame_number));
        Ok(())
    }

    /// Makes `owner` the owner of the bike identified by `frame_number`.
    pub(crate) async fn add_owner(
        self,
        frame_number: FrameNumber,
        owner: CustomerId,
    ) -> DriverResult<()> {
        let rows = db::add_owner(&mut self.db.ex().await?, &frame_number, owner).await?;
        warn_if_untouched(rows, &format!("Assignment of owner {} to bike {}", owner, frame_number));
        Ok(())
    }

    /// Leaves the bike identified by `frame_number` without an owner.
    pub(crate) async fn remove_owner(self, frame_number: FrameNumber) -> DriverResult<()> {
        let rows = db::remove_owner(&mut self.db.ex().await?, &frame_number).await?;
        warn_if_untouched(rows, &format!("Owner removal from bike {}", frame_number));
        Ok(())
    }
}
