//! Fixed-position toast used for popup and subscription feedback.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn background(self) -> &'static str {
        match self {
            NoticeKind::Success => "#28a745",
            NoticeKind::Error => "#dc3545",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_clear: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    // Every new notice re-arms the hide timer; the previous one is cancelled
    // by the effect destructor, so only one is ever pending.
    {
        let on_clear = props.on_clear.clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                let timeout = notice.as_ref().map(|_| {
                    Timeout::new(config::NOTICE_HIDE_MS, move || {
                        on_clear.emit(());
                    })
                });
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let notice = match &props.notice {
        Some(notice) => notice,
        None => return html! {},
    };

    let background = notice.kind.background();

    html! {
        <div
            class="toast-notice"
            role="status"
            style={format!(
                "position: fixed; top: 20px; right: 20px; padding: 15px 20px; \
                 border-radius: 5px; color: white; font-weight: 600; z-index: 10000; \
                 max-width: 400px; background-color: {};",
                background
            )}
        >
            { &notice.message }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_the_kind() {
        assert_eq!(Notice::success("ок").kind, NoticeKind::Success);
        assert_eq!(Notice::error("нет").kind, NoticeKind::Error);
    }

    #[test]
    fn every_kind_has_a_background() {
        assert_eq!(NoticeKind::Success.background(), "#28a745");
        assert_eq!(NoticeKind::Error.background(), "#dc3545");
    }
}
