//! Contact form: phone mask, message length counter, business-hours badge
//! and URL-parameter prefill of subject and message.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, Local, Timelike, Weekday};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, UrlSearchParams};
use yew::prelude::*;

use crate::state::validate::{format_phone, is_valid_email, MESSAGE_LIMIT};

const STATUS_REFRESH_MS: u32 = 60_000;

const SUBJECTS: &[(&str, &str)] = &[
    ("tandem", "Тандем-прыжок"),
    ("aff", "Курс AFF"),
    ("flight", "Полётное обучение"),
    ("other", "Другое"),
];

/// Mon-Fri 06:00-23:00, Sat-Sun 08:00-22:00, local time.
fn is_open_now() -> bool {
    let now = Local::now();
    let hour = now.hour();
    match now.weekday() {
        Weekday::Sat | Weekday::Sun => (8..22).contains(&hour),
        _ => (6..23).contains(&hour),
    }
}

fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let subject = use_state(|| SUBJECTS[0].0.to_string());
    let message = use_state(String::new);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let open_now = use_state(is_open_now);
    let status_timer: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    // Refresh the business-hours badge every minute.
    {
        let open_now = open_now.clone();
        let status_timer = status_timer.clone();
        use_effect_with_deps(
            move |_| {
                *status_timer.borrow_mut() = Some(Interval::new(STATUS_REFRESH_MS, move || {
                    open_now.set(is_open_now());
                }));
                move || {
                    status_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    // One-time prefill from URL parameters (?subject=aff&message=...).
    {
        let subject = subject.clone();
        let message = message.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(value) = query_param("subject") {
                    if SUBJECTS.iter().any(|(id, _)| *id == value) {
                        subject.set(value);
                    }
                }
                if let Some(value) = query_param("message") {
                    let decoded = urlencoding::decode(&value)
                        .map(|d| d.into_owned())
                        .unwrap_or(value);
                    message.set(decoded);
                }
                || ()
            },
            (),
        );
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_phone(&input.value());
            input.set_value(&formatted);
            phone.set(formatted);
        })
    };

    let on_subject = {
        let subject = subject.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            subject.set(select.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let subject = subject.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitted.set(false);
            if name.trim().is_empty() {
                form_error.set(Some("Пожалуйста, укажите имя".to_string()));
                return;
            }
            if !is_valid_email(email.trim()) {
                form_error.set(Some("Пожалуйста, введите корректный email".to_string()));
                return;
            }
            if message.trim().is_empty() {
                form_error.set(Some("Пожалуйста, напишите сообщение".to_string()));
                return;
            }
            if message.chars().count() > MESSAGE_LIMIT {
                form_error.set(Some("Сообщение слишком длинное".to_string()));
                return;
            }
            form_error.set(None);
            submitting.set(true);

            // The contact form has no backend endpoint yet; keep the original
            // simulated two-second round trip.
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let subject = subject.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                TimeoutFuture::new(2_000).await;
                submitting.set(false);
                submitted.set(true);
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                subject.set(SUBJECTS[0].0.to_string());
                message.set(String::new());
            });
        })
    };

    let over_limit = message.chars().count() > MESSAGE_LIMIT;

    html! {
        <section id="contact" class="contact-section">
            <style>
            {r#".contact-section { padding: 4rem 1rem; max-width: 720px; margin: 0 auto; }
            .contact-section input, .contact-section select, .contact-section textarea {
                width: 100%; padding: 0.6rem; margin-bottom: 0.75rem;
                border: 1px solid #ccc; border-radius: 6px;
            }
            .contact-section textarea { min-height: 120px; }
            .working-status.open { color: #28a745; font-weight: 600; }
            .working-status.closed { color: #dc3545; font-weight: 600; }
            .message-counter.over { color: #dc3545; }
            .form-error { color: #dc3545; margin-bottom: 0.75rem; }
            .form-success { color: #28a745; margin-bottom: 0.75rem; }"#}
            </style>
            <h2>{"Контакты"}</h2>
            <p>
                {"Статус: "}
                <span class={classes!("working-status", if *open_now { "open" } else { "closed" })}>
                    { if *open_now { "Открыто" } else { "Закрыто" } }
                </span>
                {" · Пн-Пт 6:00-23:00, Сб-Вс 8:00-22:00"}
            </p>
            <form onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Ваше имя"
                    value={(*name).clone()}
                    oninput={on_name}
                />
                <input
                    type="email"
                    placeholder="ваш@email.ru"
                    value={(*email).clone()}
                    oninput={on_email}
                />
                <input
                    id="contact-phone"
                    type="tel"
                    placeholder="+7 (___) ___-__-__"
                    value={(*phone).clone()}
                    oninput={on_phone}
                />
                <select value={(*subject).clone()} onchange={on_subject} aria-label="Тема обращения">
                    {
                        SUBJECTS.iter().map(|(id, label)| html! {
                            <option key={*id} value={*id} selected={*id == subject.as_str()}>
                                { *label }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
                <textarea
                    placeholder="Сообщение"
                    value={(*message).clone()}
                    oninput={on_message}
                    class={classes!(over_limit.then(|| "is-invalid"))}
                />
                <div class={classes!("message-counter", over_limit.then(|| "over"))}>
                    { format!("{} / {}", message.chars().count(), MESSAGE_LIMIT) }
                </div>
                {
                    if let Some(error) = (*form_error).as_ref() {
                        html! { <div class="form-error">{ error }</div> }
                    } else if *submitted {
                        html! { <div class="form-success">{"Спасибо! Ваше сообщение отправлено."}</div> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" disabled={*submitting}>
                    { if *submitting { "Отправка..." } else { "Отправить" } }
                </button>
            </form>
        </section>
    }
}
