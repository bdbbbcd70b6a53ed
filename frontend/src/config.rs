pub struct Config;

impl Config {
    /// Selector for the element the filter panel is prepended to.
    pub const CONTENT_WRAPPER: &'static str = ".content-wrapper";
    pub const RESULTS_CONTAINER: &'static str = ".concerts-container";
    pub const EVENT_COUNT: &'static str = ".event-count";
    pub const DATE_SECTIONS: &'static str = "[data-date]";
    pub const STICKY_LABEL: &'static str = ".sticky-date";
    pub const CURRENT_DATE: &'static str = ".current-date";

    /// Class toggled on the sticky label when it should show.
    pub const STICKY_VISIBLE_CLASS: &'static str = "visible";
    pub const STICKY_OFFSET_PX: f64 = shared::DEFAULT_STICKY_OFFSET;

    /// `<body data-user-logged-in="true">` marks a signed-in viewer.
    pub const AUTH_FLAG_KEY: &'static str = "userLoggedIn";

    /// Header marking fetches as programmatic rather than navigations.
    pub const REQUESTED_WITH: (&'static str, &'static str) = ("X-Requested-With", "XMLHttpRequest");

    pub fn api_base_url() -> String {
        // The listing page and its JSON endpoints are served from the same
        // origin, so relative URLs work in every environment.
        "".to_string()
    }
}
