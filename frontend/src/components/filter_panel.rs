use crate::components::notice::Notices;
use crate::dom::read_checkboxes;
use shared::{CheckboxState, FilterCategory, FilterOption, FilterOptionsResponse, Preferences};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    /// `None` until `/get_filter_options` settles; nothing is shown before then.
    pub options: Option<FilterOptionsResponse>,
    pub preferences: Preferences,
    #[prop_or_default]
    pub loading: bool,
    /// Fired with every checkbox in the panel whenever one of them changes.
    pub on_change: Callback<Vec<CheckboxState>>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let panel_ref = use_node_ref();

    let on_toggle = {
        let panel_ref = panel_ref.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: Event| {
            if let Some(panel) = panel_ref.cast::<web_sys::Element>() {
                on_change.emit(read_checkboxes(&panel));
            }
        })
    };

    let Some(options) = &props.options else {
        return html! {};
    };

    html! {
        <div ref={panel_ref} class={classes!("filter-panel", props.loading.then_some("filter-panel--loading"))}>
            <Notices />
            {for FilterCategory::PANEL_ORDER.iter().map(|&category| html! {
                <FilterSection
                    key={category.as_str()}
                    {category}
                    options={options.options(category)}
                    preferences={props.preferences.clone()}
                    on_toggle={on_toggle.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FilterSectionProps {
    category: FilterCategory,
    options: Vec<FilterOption>,
    preferences: Preferences,
    on_toggle: Callback<Event>,
}

#[function_component(FilterSection)]
fn filter_section(props: &FilterSectionProps) -> Html {
    let selected = props
        .options
        .iter()
        .filter(|o| props.preferences.is_selected(o.category, &o.value))
        .count();

    html! {
        <div class="filter-section" data-filter-section={props.category.as_str()}>
            <h3>
                {props.category.title()}
                if selected > 0 {
                    <span class="filter-section__count">{selected}</span>
                }
            </h3>
            <div class="filter-options">
                {for props.options.iter().map(|option| html! {
                    <label key={option.value.clone()}>
                        <input
                            type="checkbox"
                            value={option.value.clone()}
                            data-filter-type={option.category.as_str()}
                            checked={props.preferences.is_selected(option.category, &option.value)}
                            onchange={props.on_toggle.clone()}
                        />
                        {&option.value}
                    </label>
                })}
            </div>
        </div>
    }
}
