use crate::dto::concert::ConcertListResponse;
use crate::dto::filter_options::FilterOptionsResponse;
use crate::dto::preferences::Preferences;
use crate::error::Result;

/// Server endpoints the filter panel talks to.
///
/// Futures are not `Send`: the browser implementation holds JS values across
/// awaits.
#[async_trait::async_trait(?Send)]
pub trait ListingService {
    /// `GET /get_filter_options`
    async fn fetch_filter_options(&self) -> Result<FilterOptionsResponse>;

    /// `POST /save_preferences`
    async fn save_preferences(&self, preferences: &Preferences) -> Result<()>;

    /// `GET /?venues[]=...&neighborhoods[]=...&genres[]=...`
    async fn fetch_concerts(&self, preferences: &Preferences) -> Result<ConcertListResponse>;
}
