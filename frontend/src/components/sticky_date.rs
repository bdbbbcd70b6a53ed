use crate::config::Config;
use crate::context::AppContext;
use crate::dom;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use log::{debug, warn};
use shared::{FrameThrottle, SharedError, StickyDateTracker, StickyUpdate};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element};
use yew::prelude::*;

struct StickyState {
    tracker: StickyDateTracker,
    throttle: FrameThrottle,
    frame: Option<AnimationFrame>,
    document: Document,
    label: Element,
    current_date: Element,
}

/// Live scroll subscription for the sticky date label.
///
/// Dropping it (or calling [`detach`](Self::detach)) removes the scroll
/// listener and cancels a pending frame.
pub struct StickyBinding {
    _listener: EventListener,
    state: Rc<RefCell<StickyState>>,
}

impl StickyBinding {
    pub fn attach(context: &AppContext) -> Result<Self, SharedError> {
        let document = dom::document()?;
        let window = web_sys::window().ok_or_else(|| SharedError::dom_missing("window"))?;
        let label = dom::require(&document, Config::STICKY_LABEL)?;
        let current_date = dom::require(&document, Config::CURRENT_DATE)?;

        let state = Rc::new(RefCell::new(StickyState {
            tracker: StickyDateTracker::with_offset(context.formatter, context.sticky_offset),
            throttle: FrameThrottle::default(),
            frame: None,
            document,
            label,
            current_date,
        }));

        let listener = {
            let state = state.clone();
            EventListener::new(&window, "scroll", move |_| schedule(&state))
        };

        // Pages can load already scrolled.
        schedule(&state);
        debug!("Sticky date header attached");

        Ok(Self {
            _listener: listener,
            state,
        })
    }

    pub fn detach(self) {
        self.state.borrow_mut().frame.take();
        debug!("Sticky date header detached");
    }
}

fn schedule(state: &Rc<RefCell<StickyState>>) {
    let mut s = state.borrow_mut();
    if !s.throttle.try_schedule() {
        return;
    }
    let frame_state = state.clone();
    // Replacing the handle drops the previous frame, which has already run.
    s.frame = Some(request_animation_frame(move |_| run_frame(&frame_state)));
}

fn run_frame(state: &Rc<RefCell<StickyState>>) {
    let mut s = state.borrow_mut();
    s.throttle.frame_done();

    let sections = dom::section_bounds(&s.document);
    let update = s.tracker.on_scroll(dom::scroll_y(), &sections);
    apply(&s, &update);
}

fn apply(s: &StickyState, update: &StickyUpdate) {
    if let Some(visible) = update.visibility {
        let result = s
            .label
            .class_list()
            .toggle_with_force(Config::STICKY_VISIBLE_CLASS, visible);
        if result.is_err() {
            warn!("Could not toggle sticky label visibility");
        }
    }
    if let Some(text) = &update.label {
        s.current_date.set_text_content(Some(text));
    }
}

/// Drives the page's sticky date label from scroll position. Renders nothing.
#[function_component(StickyDateHeader)]
pub fn sticky_date_header() -> Html {
    let context = use_context::<AppContext>().unwrap_or_default();

    use_effect_with(context, |context| {
        let binding = match StickyBinding::attach(context) {
            Ok(binding) => Some(binding),
            Err(e) => {
                warn!("Sticky date header disabled: {}", e);
                None
            }
        };
        move || {
            if let Some(binding) = binding {
                binding.detach();
            }
        }
    });

    html! {}
}
