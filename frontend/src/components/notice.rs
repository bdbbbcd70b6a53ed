use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeKind {
    Error,
    Warning,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Error => "filter-notice filter-notice--error",
            NoticeKind::Warning => "filter-notice filter-notice--warning",
        }
    }
}

/// A small, self-dismissing message shown above the filter sections.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub kind: NoticeKind,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            duration: Some(6000),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Warning)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoticeContext {
    pub notices: Vec<Notice>,
    pub push: Callback<Notice>,
    pub dismiss: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct NoticeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NoticeProvider)]
pub fn notice_provider(props: &NoticeProviderProps) -> Html {
    let notices = use_reducer(NoticeList::default);

    let push = {
        let notices = notices.dispatcher();
        Callback::from(move |notice: Notice| {
            let id = notice.id;
            let duration = notice.duration;
            notices.dispatch(NoticeAction::Push(notice));

            if let Some(duration_ms) = duration {
                let notices = notices.clone();
                Timeout::new(duration_ms, move || notices.dispatch(NoticeAction::Dismiss(id))).forget();
            }
        })
    };

    let dismiss = {
        let notices = notices.dispatcher();
        Callback::from(move |id: Uuid| notices.dispatch(NoticeAction::Dismiss(id)))
    };

    let context = NoticeContext {
        notices: notices.0.clone(),
        push,
        dismiss,
    };

    html! {
        <ContextProvider<NoticeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<NoticeContext>>
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct NoticeList(Vec<Notice>);

enum NoticeAction {
    Push(Notice),
    Dismiss(Uuid),
}

impl Reducible for NoticeList {
    type Action = NoticeAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut notices = self.0.clone();
        match action {
            NoticeAction::Push(notice) => notices.push(notice),
            NoticeAction::Dismiss(id) => notices.retain(|n| n.id != id),
        }
        NoticeList(notices).into()
    }
}

/// Renders the current notices; place it wherever the messages belong.
#[function_component(Notices)]
pub fn notices() -> Html {
    let Some(context) = use_context::<NoticeContext>() else {
        return html! {};
    };

    html! {
        <div class="filter-notices" role="status">
            {for context.notices.iter().map(|notice| {
                let dismiss = {
                    let dismiss = context.dismiss.clone();
                    let id = notice.id;
                    Callback::from(move |_: MouseEvent| dismiss.emit(id))
                };
                html! {
                    <div key={notice.id.to_string()} class={notice.kind.class()}>
                        <span class="filter-notice__message">{&notice.message}</span>
                        <button type="button" class="filter-notice__close" onclick={dismiss}>{"×"}</button>
                    </div>
                }
            })}
        </div>
    }
}
