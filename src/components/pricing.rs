//! Pricing section: basic/advanced plan toggle and the package booking modal.

use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::toast::Notice;
use crate::state::validate::format_phone;

#[derive(Clone, Copy, PartialEq)]
pub enum Plan {
    Basic,
    Advanced,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    pub basic_price: &'static str,
    pub advanced_price: &'static str,
    pub description: &'static str,
}

pub const PACKAGES: &[Package] = &[
    Package {
        id: "tandem",
        name: "Тандем-прыжок",
        basic_price: "15,000 ₽",
        advanced_price: "12,750 ₽",
        description: "Прыжок с инструктором с высоты 4000 метров.",
    },
    Package {
        id: "aff",
        name: "Курс AFF",
        basic_price: "85,000 ₽",
        advanced_price: "72,250 ₽",
        description: "Полный курс обучения самостоятельным прыжкам.",
    },
    Package {
        id: "flight",
        name: "Полётное обучение",
        basic_price: "45,000 ₽",
        advanced_price: "38,250 ₽",
        description: "Обучение пилотированию купола и групповой акробатике.",
    },
];

impl Package {
    fn price_for(&self, plan: Plan) -> String {
        match plan {
            Plan::Basic => self.basic_price.to_string(),
            Plan::Advanced => format!("{} (продвинутый)", self.advanced_price),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    pub on_notify: Callback<Notice>,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    let plan = use_state(|| Plan::Basic);
    let selected = use_state(|| None::<Package>);
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let form_error = use_state(|| None::<&'static str>);

    let set_plan = |next: Plan| {
        let plan = plan.clone();
        Callback::from(move |_: Event| plan.set(next))
    };

    let open_modal = |package: Package| {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(package)))
    };

    let close_modal = {
        let selected = selected.clone();
        let name = name.clone();
        let phone = phone.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(None);
            name.set(String::new());
            phone.set(String::new());
            form_error.set(None);
        })
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    // The phone field reuses the contact-form mask.
    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_phone(&input.value());
            input.set_value(&formatted);
            phone.set(formatted);
        })
    };

    let on_book = {
        let selected = selected.clone();
        let name = name.clone();
        let phone = phone.clone();
        let form_error = form_error.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if name.trim().is_empty() || phone.trim().len() < 4 {
                form_error.set(Some("Заполните имя и телефон"));
                return;
            }
            on_notify.emit(Notice::success(
                "Спасибо! Ваша заявка отправлена. Мы свяжемся в ближайшее время.",
            ));
            selected.set(None);
            name.set(String::new());
            phone.set(String::new());
            form_error.set(None);
        })
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <section id="pricing" class="pricing-section">
            <style>
            {r#".pricing-section { padding: 4rem 1rem; max-width: 1100px; margin: 0 auto; }
            .plan-toggle { display: flex; justify-content: center; gap: 1.5rem; margin-bottom: 2rem; }
            .pricing-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
            .pricing-card { border: 1px solid #e3e3e3; border-radius: 12px; padding: 2rem; text-align: center; }
            .pricing-card .price { font-size: 1.75rem; font-weight: 700; margin: 1rem 0; }
            .pricing-modal-overlay { position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 8000; }
            .pricing-modal { background: #fff; border-radius: 12px; padding: 2rem; width: 100%; max-width: 420px; }
            .pricing-modal input { width: 100%; padding: 0.6rem; margin-bottom: 0.75rem; border: 1px solid #ccc; border-radius: 6px; }"#}
            </style>
            <h2>{"Цены"}</h2>
            <div class="plan-toggle">
                <label>
                    <input
                        type="radio"
                        name="plan"
                        id="basic"
                        checked={*plan == Plan::Basic}
                        onchange={set_plan(Plan::Basic)}
                    />
                    {" Базовый"}
                </label>
                <label>
                    <input
                        type="radio"
                        name="plan"
                        id="advanced"
                        checked={*plan == Plan::Advanced}
                        onchange={set_plan(Plan::Advanced)}
                    />
                    {" Продвинутый (-15%)"}
                </label>
            </div>
            <div class="pricing-grid">
                {
                    PACKAGES.iter().map(|package| html! {
                        <div class="pricing-card" key={package.id}>
                            <h3>{ package.name }</h3>
                            <p>{ package.description }</p>
                            <div class="price">
                                {
                                    match *plan {
                                        Plan::Basic => package.basic_price,
                                        Plan::Advanced => package.advanced_price,
                                    }
                                }
                            </div>
                            <button onclick={open_modal(*package)}>{"Записаться"}</button>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            {
                if let Some(package) = *selected {
                    html! {
                        <div class="pricing-modal-overlay" onclick={close_modal.clone()}>
                            <div class="pricing-modal" role="dialog" aria-modal="true" onclick={stop.clone()}>
                                <h3 id="package-name">{ package.name }</h3>
                                <p id="package-price">{ package.price_for(*plan) }</p>
                                <form onsubmit={on_book.clone()}>
                                    <input
                                        type="text"
                                        placeholder="Ваше имя"
                                        value={(*name).clone()}
                                        oninput={on_name_input.clone()}
                                    />
                                    <input
                                        type="tel"
                                        placeholder="+7 (___) ___-__-__"
                                        value={(*phone).clone()}
                                        oninput={on_phone_input.clone()}
                                    />
                                    {
                                        if let Some(message) = *form_error {
                                            html! { <div style="color: #dc3545; margin-bottom: 0.5rem;">{ message }</div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <button type="submit">{"Отправить заявку"}</button>
                                    <button type="button" onclick={close_modal.clone()}>{"Отмена"}</button>
                                </form>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
