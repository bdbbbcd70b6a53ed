use crate::config::Config;
use log::debug;
use shared::DateFormatter;
use web_sys::Document;

/// Page-level facts every component needs, built once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    pub authenticated: bool,
    pub formatter: DateFormatter,
    pub sticky_offset: f64,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            authenticated: false,
            formatter: DateFormatter::default(),
            sticky_offset: Config::STICKY_OFFSET_PX,
        }
    }
}

impl AppContext {
    pub fn new(authenticated: bool, language_tag: &str) -> Self {
        Self {
            authenticated,
            formatter: DateFormatter::from_language_tag(language_tag),
            ..Self::default()
        }
    }

    /// Reads the auth flag from `<body>` and the locale from the navigator.
    pub fn from_document(document: &Document) -> Self {
        let flag = document
            .body()
            .and_then(|body| body.dataset().get(Config::AUTH_FLAG_KEY));
        let language = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_default();

        let context = Self::new(is_logged_in(flag.as_deref()), &language);
        debug!(
            "App context: authenticated={}, locale={:?}",
            context.authenticated,
            context.formatter.locale()
        );
        context
    }
}

/// Only the literal string `"true"` counts as signed in.
pub fn is_logged_in(flag: Option<&str>) -> bool {
    flag == Some("true")
}
