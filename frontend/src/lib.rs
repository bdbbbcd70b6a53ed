use crate::components::concert_filters::ConcertFilters;
use crate::components::notice::NoticeProvider;
use crate::components::sticky_date::StickyDateHeader;
use crate::config::Config;
use crate::context::AppContext;
use anyhow::Context;
use log::{debug, info, warn};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::prelude::*;
use yew::AppHandle;

pub mod api;
pub mod components;
pub mod config;
pub mod context;
pub mod dom;


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub context: AppContext,
    /// False when the page has no `.content-wrapper`; only the sticky header runs.
    #[prop_or(true)]
    pub show_panel: bool,
    #[prop_or_default]
    pub results_host: Option<Element>,
    #[prop_or_default]
    pub count_host: Option<Element>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    debug!("App component rendering");
    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
            <NoticeProvider>
                if props.show_panel {
                    <ConcertFilters
                        results_host={props.results_host.clone()}
                        count_host={props.count_host.clone()}
                    />
                }
                <StickyDateHeader />
            </NoticeProvider>
        </ContextProvider<AppContext>>
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<AppHandle<App>>> = RefCell::new(None);
}

fn optional_element(document: &web_sys::Document, selector: &str) -> Option<Element> {
    match dom::require(document, selector) {
        Ok(element) => Some(element),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

fn mount() -> anyhow::Result<AppHandle<App>> {
    let document = dom::document().context("no document to mount into")?;
    let context = AppContext::from_document(&document);

    let (host, show_panel) = match dom::insert_panel_host(&document) {
        Ok(host) => (host, true),
        Err(e) => {
            warn!("Filter panel disabled: {}", e);
            let body = document.body().context("page has no <body>")?;
            let host = document
                .create_element("div")
                .map_err(|_| anyhow::anyhow!("could not create a mount point"))?;
            body.append_child(&host)
                .map_err(|_| anyhow::anyhow!("could not attach the mount point"))?;
            (host, false)
        }
    };

    let props = AppProps {
        context,
        show_panel,
        results_host: optional_element(&document, Config::RESULTS_CONTAINER),
        count_host: optional_element(&document, Config::EVENT_COUNT),
    };
    Ok(yew::Renderer::<App>::with_root_and_props(host, props).render())
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    info!("Initializing concert filters...");

    if MOUNTED.with(|m| m.borrow().is_some()) {
        debug!("Already mounted");
        return Ok(());
    }

    match mount() {
        Ok(handle) => {
            MOUNTED.with(|m| *m.borrow_mut() = Some(handle));
            info!("Concert filters mounted");
        }
        // Never break the rest of the page over an enhancement.
        Err(e) => warn!("Concert filters not mounted: {:#}", e),
    }
    Ok(())
}

/// Removes the filter panel and the scroll subscription.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(handle) = MOUNTED.with(|m| m.borrow_mut().take()) {
        handle.destroy();
        info!("Concert filters unmounted");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
