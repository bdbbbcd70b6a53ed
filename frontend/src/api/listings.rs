use crate::api::api_url;
use crate::api::utils::{ensure_ok, malformed, network_error, programmatic_get, programmatic_post};
use log::debug;
use shared::{ConcertListResponse, FilterOptionsResponse, ListingService, Preferences, Result};

pub async fn get_filter_options() -> Result<FilterOptionsResponse> {
    debug!("Fetching filter options");

    let response = programmatic_get(&api_url("/get_filter_options"))
        .send()
        .await
        .map_err(|e| network_error("Failed to fetch filter options", e))?;
    let response = ensure_ok(response)?;

    let options = response
        .json::<FilterOptionsResponse>()
        .await
        .map_err(|e| malformed("Failed to parse filter options", e))?;

    debug!(
        "Fetched filter options (saved preferences: {})",
        options.user_preferences.is_some()
    );
    Ok(options)
}

pub async fn save_preferences(preferences: &Preferences) -> Result<()> {
    debug!("Saving preferences");

    let response = programmatic_post(&api_url("/save_preferences"))
        .json(preferences)
        .map_err(|e| malformed("Failed to serialize preferences", e))?
        .send()
        .await
        .map_err(|e| network_error("Failed to save preferences", e))?;
    ensure_ok(response)?;

    debug!("Saved preferences");
    Ok(())
}

pub async fn get_concerts(preferences: &Preferences) -> Result<ConcertListResponse> {
    let url = format!("{}?{}", api_url("/"), preferences.to_query_string());
    debug!("Fetching concerts: {}", url);

    let response = programmatic_get(&url)
        .send()
        .await
        .map_err(|e| network_error("Failed to fetch concerts", e))?;
    let response = ensure_ok(response)?;

    let list = response
        .json::<ConcertListResponse>()
        .await
        .map_err(|e| malformed("Failed to parse concerts response", e))?;

    debug!("Fetched {} of {} concerts", list.concerts.len(), list.event_count);
    Ok(list)
}

/// [`ListingService`] backed by the page's own origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpListingService;

#[async_trait::async_trait(?Send)]
impl ListingService for HttpListingService {
    async fn fetch_filter_options(&self) -> Result<FilterOptionsResponse> {
        get_filter_options().await
    }

    async fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
        save_preferences(preferences).await
    }

    async fn fetch_concerts(&self, preferences: &Preferences) -> Result<ConcertListResponse> {
        get_concerts(preferences).await
    }
}
