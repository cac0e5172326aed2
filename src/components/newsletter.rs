//! Footer newsletter form: same validation as the popup, inline feedback
//! instead of a toast, success message auto-removed after five seconds.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::config;
use crate::state::validate::is_valid_email;

#[derive(Clone, PartialEq)]
struct InlineMessage {
    text: String,
    is_error: bool,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let message = use_state(|| None::<InlineMessage>);
    let submitting = use_state(|| false);
    let hide_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let on_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let address = email.trim().to_lowercase();
            if address.is_empty() {
                message.set(Some(InlineMessage {
                    text: "Пожалуйста, введите email адрес".to_string(),
                    is_error: true,
                }));
                return;
            }
            if !is_valid_email(&address) {
                message.set(Some(InlineMessage {
                    text: "Пожалуйста, введите корректный email адрес".to_string(),
                    is_error: true,
                }));
                return;
            }
            submitting.set(true);

            let email = email.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let hide_timer = hide_timer.clone();
            spawn_local(async move {
                match api::subscribe(&address, "newsletter").await {
                    Ok(server_message) => {
                        message.set(Some(InlineMessage {
                            text: server_message.unwrap_or_else(|| {
                                "Спасибо за подписку! Проверьте вашу почту.".to_string()
                            }),
                            is_error: false,
                        }));
                        email.set(String::new());

                        // Success feedback clears itself.
                        let message = message.clone();
                        *hide_timer.borrow_mut() =
                            Some(Timeout::new(config::NOTICE_HIDE_MS, move || {
                                message.set(None);
                            }));
                    }
                    Err(text) => {
                        message.set(Some(InlineMessage { text, is_error: true }));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form id="newsletter-form" class="newsletter-form" onsubmit={on_submit}>
            <style>
            {r#".newsletter-form { display: flex; flex-direction: column; gap: 0.5rem; max-width: 360px; }
            .newsletter-form .row { display: flex; gap: 0.5rem; }
            .newsletter-form input { flex: 1; padding: 0.6rem; border: 1px solid #ccc; border-radius: 6px; }
            .newsletter-message.error { color: #dc3545; }
            .newsletter-message.success { color: #28a745; }"#}
            </style>
            <div class="row">
                <input
                    type="email"
                    placeholder="ваш@email.ru"
                    aria-label="Email для рассылки"
                    value={(*email).clone()}
                    oninput={on_input}
                />
                <button type="submit" disabled={*submitting}>
                    { if *submitting { "Подписываем..." } else { "Подписаться" } }
                </button>
            </div>
            {
                if let Some(inline) = (*message).as_ref() {
                    html! {
                        <div class={classes!(
                            "newsletter-message",
                            if inline.is_error { "error" } else { "success" }
                        )}>
                            { &inline.text }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
