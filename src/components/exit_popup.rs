//! Exit-intent email capture popup.
//!
//! Shown at most once per browser: a pointer leaving through the top of the
//! viewport arms a short debounce, and when it elapses the popup opens and
//! the persisted flag is set. The form posts to the subscription endpoint;
//! success retires the popup, failure keeps it open for another attempt.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::components::toast::Notice;
use crate::config;
use crate::dom;
use crate::state::exit_intent::{ExitIntent, Phase};
use crate::storage::BrowserStorage;

#[derive(Properties, PartialEq)]
pub struct ExitPopupProps {
    pub on_notify: Callback<Notice>,
}

type Machine = Rc<RefCell<ExitIntent<BrowserStorage>>>;
type TimerSlot = Rc<RefCell<Option<Timeout>>>;

fn open_popup(visible: &UseStateHandle<bool>, email_input: &NodeRef) {
    visible.set(true);
    dom::set_body_scroll_locked(true);
    // Focus lands after the popup has rendered.
    let email_input = email_input.clone();
    Timeout::new(100, move || {
        if let Some(input) = email_input.cast::<HtmlInputElement>() {
            let _ = input.focus();
        }
    })
    .forget();
}

fn close_popup(machine: &Machine, debounce: &TimerSlot, visible: &UseStateHandle<bool>) {
    if machine.borrow_mut().dismiss() {
        debounce.borrow_mut().take();
        visible.set(false);
        dom::set_body_scroll_locked(false);
        dom::focus_selector(".burger-menu");
    }
}

#[function_component(ExitPopup)]
pub fn exit_popup(props: &ExitPopupProps) -> Html {
    let machine: Machine = use_mut_ref(|| ExitIntent::new(BrowserStorage));
    let debounce: TimerSlot = use_mut_ref(|| None);
    let visible = use_state(|| false);
    let email = use_state(String::new);
    let field_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let email_input = use_node_ref();

    // Document-level listeners: exit-intent detection and Escape-to-close.
    {
        let machine = machine.clone();
        let debounce = debounce.clone();
        let visible = visible.clone();
        let email_input = email_input.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let mouseleave = {
                    let machine = machine.clone();
                    let debounce = debounce.clone();
                    let visible = visible.clone();
                    let email_input = email_input.clone();
                    Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                        if !machine.borrow_mut().pointer_left(e.client_y()) {
                            return;
                        }
                        let machine = machine.clone();
                        let visible = visible.clone();
                        let email_input = email_input.clone();
                        let timeout = Timeout::new(config::EXIT_INTENT_DELAY_MS, move || {
                            if machine.borrow_mut().debounce_elapsed() {
                                info!("exit intent detected, showing popup");
                                open_popup(&visible, &email_input);
                            }
                        });
                        // Replacing the slot cancels any stale handle.
                        *debounce.borrow_mut() = Some(timeout);
                    }) as Box<dyn FnMut(web_sys::MouseEvent)>)
                };
                document
                    .add_event_listener_with_callback(
                        "mouseleave",
                        mouseleave.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                let keydown = {
                    let machine = machine.clone();
                    let debounce = debounce.clone();
                    let visible = visible.clone();
                    Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                        if e.key() == "Escape" && machine.borrow().phase() == Phase::Showing {
                            close_popup(&machine, &debounce, &visible);
                        }
                    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>)
                };
                document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let _ = document.remove_event_listener_with_callback(
                        "mouseleave",
                        mouseleave.as_ref().unchecked_ref(),
                    );
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        keydown.as_ref().unchecked_ref(),
                    );
                    drop(mouseleave);
                    drop(keydown);
                    debounce.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_close = {
        let machine = machine.clone();
        let debounce = debounce.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| close_popup(&machine, &debounce, &visible))
    };

    // Clicks inside the dialog must not reach the overlay handler.
    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let machine = machine.clone();
        let debounce = debounce.clone();
        let visible = visible.clone();
        let email = email.clone();
        let field_error = field_error.clone();
        let submitting = submitting.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let address = email.trim().to_lowercase();
            if address.is_empty() {
                field_error.set(Some("Пожалуйста, введите email".to_string()));
                return;
            }
            if !crate::state::validate::is_valid_email(&address) {
                field_error.set(Some("Пожалуйста, введите корректный email".to_string()));
                return;
            }
            field_error.set(None);
            submitting.set(true);

            let machine = machine.clone();
            let debounce = debounce.clone();
            let visible = visible.clone();
            let email = email.clone();
            let submitting = submitting.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                match api::subscribe(&address, "popup").await {
                    Ok(message) => {
                        let message = message.unwrap_or_else(|| {
                            format!("Спасибо! Промокод отправлен на {}", address)
                        });
                        on_notify.emit(Notice::success(message));
                        email.set(String::new());
                        machine.borrow_mut().submit_succeeded();
                        debounce.borrow_mut().take();
                        visible.set(false);
                        dom::set_body_scroll_locked(false);
                    }
                    Err(message) => {
                        on_notify.emit(Notice::error(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div
            id="exit-popup"
            class="exit-popup-overlay"
            aria-hidden="false"
            onclick={on_close.clone()}
        >
            <style>
            {r#".exit-popup-overlay {
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.6);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 9000;
            }
            .exit-popup {
                background: #fff;
                border-radius: 12px;
                padding: 2.5rem;
                width: 100%;
                max-width: 440px;
                position: relative;
                text-align: center;
            }
            .exit-popup .close-popup {
                position: absolute;
                top: 0.75rem;
                right: 1rem;
                border: none;
                background: none;
                font-size: 1.5rem;
                cursor: pointer;
            }
            .exit-popup input[type="email"] {
                width: 100%;
                padding: 0.75rem;
                margin: 1rem 0 0.5rem;
                border: 1px solid #ccc;
                border-radius: 6px;
            }
            .exit-popup .field-error {
                color: #dc3545;
                font-size: 0.875rem;
                margin-bottom: 0.5rem;
            }
            .exit-popup button[type="submit"] {
                width: 100%;
                padding: 0.75rem;
                border: none;
                border-radius: 6px;
                background: #007bff;
                color: #fff;
                font-weight: 600;
                cursor: pointer;
            }
            .exit-popup button[type="submit"]:disabled { opacity: 0.7; }"#}
            </style>
            <div class="exit-popup" role="dialog" aria-modal="true" onclick={on_dialog_click}>
                <button class="close-popup" aria-label="Закрыть" onclick={on_close}>
                    {"×"}
                </button>
                <h2>{"Подождите, не уходите!"}</h2>
                <p>{"Оставьте email и получите промокод на первый прыжок."}</p>
                <form onsubmit={on_submit}>
                    <input
                        ref={email_input}
                        type="email"
                        placeholder="ваш@email.ru"
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />
                    {
                        if let Some(message) = (*field_error).as_ref() {
                            html! { <div class="field-error">{ message }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" disabled={*submitting}>
                        { if *submitting { "Отправка..." } else { "Получить промокод" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
