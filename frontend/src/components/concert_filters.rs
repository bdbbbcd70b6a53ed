use crate::api::listings::HttpListingService;
use crate::components::concert_list::ConcertList;
use crate::components::filter_panel::FilterPanel;
use crate::components::notice::{Notice, NoticeContext};
use crate::context::AppContext;
use log::debug;
use shared::{
    CheckboxState, ChangeOutcome, ConcertListResponse, FilterController, FilterOptionsResponse,
    Preferences, Ticket,
};
use web_sys::Element;
use yew::create_portal;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConcertFiltersProps {
    /// `.concerts-container`; results are not re-rendered when absent.
    #[prop_or_default]
    pub results_host: Option<Element>,
    /// `.event-count`
    #[prop_or_default]
    pub count_host: Option<Element>,
}

/// Filter panel plus the results it drives.
#[function_component(ConcertFilters)]
pub fn concert_filters(props: &ConcertFiltersProps) -> Html {
    let context = use_context::<AppContext>().unwrap_or_default();
    let notices = use_context::<NoticeContext>();
    let controller = use_memo(context.authenticated, |&authenticated| {
        FilterController::new(HttpListingService, authenticated)
    });

    let options = use_state(|| None::<FilterOptionsResponse>);
    let preferences = use_state(Preferences::default);
    let results = use_state(|| None::<(Ticket, ConcertListResponse)>);
    let loading = use_state(|| false);
    // The server-rendered list is wiped once, right before our first render.
    let host_cleared = use_mut_ref(|| false);

    // Initial load
    {
        let controller = controller.clone();
        let options = options.clone();
        let preferences = preferences.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let loaded = controller.load_options().await;
                options.set(Some(loaded));
                preferences.set(controller.preferences());
            });
            || ()
        });
    }

    let on_change = {
        let controller = controller.clone();
        let preferences = preferences.clone();
        let results = results.clone();
        let loading = loading.clone();
        let host_cleared = host_cleared.clone();
        let results_host = props.results_host.clone();
        let count_host = props.count_host.clone();
        Callback::from(move |checkboxes: Vec<CheckboxState>| {
            let selection = Preferences::from_checkboxes(checkboxes);
            preferences.set(selection.clone());
            loading.set(true);

            let controller = controller.clone();
            let results = results.clone();
            let loading = loading.clone();
            let notices = notices.clone();
            let host_cleared = host_cleared.clone();
            let results_host = results_host.clone();
            let count_host = count_host.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let report = controller.apply_change(selection).await;

                if let (Some(e), Some(notices)) = (&report.persist_error, &notices) {
                    notices.push.emit(Notice::warning(format!("Your filters could not be saved ({})", e)));
                }

                match report.outcome {
                    ChangeOutcome::Render(list) => {
                        if let Some(host) = &results_host {
                            let mut cleared = host_cleared.borrow_mut();
                            if !*cleared {
                                host.set_inner_html("");
                                *cleared = true;
                            }
                        }
                        if let Some(count) = &count_host {
                            count.set_text_content(Some(&list.count_label()));
                        }
                        results.set(Some((report.ticket, list)));
                        loading.set(false);
                    }
                    ChangeOutcome::Failed(e) => {
                        loading.set(false);
                        if let Some(notices) = &notices {
                            notices.push.emit(Notice::error(format!("Concerts could not be updated ({})", e)));
                        }
                    }
                    ChangeOutcome::Stale => {
                        debug!("Ignoring superseded results for change #{}", report.ticket.value());
                    }
                }
            });
        })
    };

    let rendered = match (&props.results_host, &*results) {
        (Some(host), Some((ticket, list))) => create_portal(
            html! {
                <ConcertList key={ticket.value()} concerts={list.concerts.clone()} formatter={context.formatter} />
            },
            host.clone(),
        ),
        (None, Some(_)) => {
            debug!("Results container missing; filtered list not shown");
            html! {}
        }
        _ => html! {},
    };



    html! {
        <>
            <FilterPanel
                options={(*options).clone()}
                preferences={(*preferences).clone()}
                loading={*loading}
                {on_change}
            />
            {rendered}
        </>
    }
}
