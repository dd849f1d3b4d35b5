//! Stock operations of [`TactillClient`].

use crate::clients::{TactillClient, TactillError};
use crate::rest::resources::{Movement, MovementCreation};
use crate::rest::{ListParams, Resource};

impl TactillClient {
    /// Lists the working shop's movements.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError`] if the request fails or a record cannot be decoded.
    pub async fn get_movements(&self, params: &ListParams) -> Result<Vec<Movement>, TactillError> {
        Movement::all(self, params).await
    }

    /// Records a movement in the working shop.
    ///
    /// The server adjusts the `stock_quantity` of every article listed in
    /// the movement. Movements cannot be updated or deleted afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the payload.
    pub async fn create_movement(
        &self,
        creation: &MovementCreation,
    ) -> Result<Movement, TactillError> {
        Movement::create(self, creation).await
    }
}
