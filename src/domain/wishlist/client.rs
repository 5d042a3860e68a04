//! Wishlist client (`GET`/`POST /wishlist/{user_id}`).

use crate::client::StockPredictClient;
use crate::domain::wishlist::{wire, WishlistEntry};
use crate::error::{HttpError, SdkError};
use crate::shared::UserId;

pub struct Wishlist<'a> {
    pub(crate) client: &'a StockPredictClient,
}

impl<'a> Wishlist<'a> {
    /// Fetch the user's saved wishlist. A user who has never saved one gets
    /// an empty list, not an error.
    pub async fn fetch(&self, user: &UserId) -> Result<Vec<WishlistEntry>, SdkError> {
        match self.client.http.get_wishlist(user).await {
            Ok(raw) => Ok(raw.into_iter().map(WishlistEntry::from).collect()),
            Err(HttpError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the user's stored wishlist with `entries`.
    pub async fn save(&self, user: &UserId, entries: &[WishlistEntry]) -> Result<(), SdkError> {
        let request = wire::SaveWishlistRequest {
            wishlist: entries.iter().map(Into::into).collect(),
        };
        self.client.http.save_wishlist(user, &request).await?;
        Ok(())
    }
}
