use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod api;
mod config;
mod dom;
mod storage;
mod state {
    pub mod carousel;
    pub mod exit_intent;
    pub mod validate;
}
mod components {
    pub mod contact;
    pub mod counters;
    pub mod exit_popup;
    pub mod gallery;
    pub mod hero_slider;
    pub mod newsletter;
    pub mod pricing;
    pub mod programs;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#programs", "Программы"),
    ("#pricing", "Цены"),
    ("#gallery", "Галерея"),
    ("#contact", "Контакты"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 100);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    drop(scroll_callback);
                }
            },
            (),
        );
    }

    // Close the open menu on Escape or a click outside the navigation.
    {
        let open = *menu_open;
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listeners = open.then(|| {
                    let document = web_sys::window().unwrap().document().unwrap();

                    let keydown = {
                        let menu_open = menu_open.clone();
                        Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                            if e.key() == "Escape" {
                                menu_open.set(false);
                            }
                        })
                            as Box<dyn FnMut(web_sys::KeyboardEvent)>)
                    };
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    let click = {
                        let menu_open = menu_open.clone();
                        Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                            let outside = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                                .map_or(true, |el| {
                                    el.closest(".top-nav").ok().flatten().is_none()
                                });
                            if outside {
                                menu_open.set(false);
                            }
                        })
                            as Box<dyn FnMut(web_sys::MouseEvent)>)
                    };
                    document
                        .add_event_listener_with_callback(
                            "click",
                            click.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    (document, keydown, click)
                });

                move || {
                    if let Some((document, keydown, click)) = listeners {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            click.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            open,
        );
    }

    // Lock page scrolling while the mobile menu is open.
    use_effect_with_deps(
        move |open: &bool| {
            dom::set_body_scroll_locked(*open);
            || ()
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    let nav_to = |fragment: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            dom::scroll_to_anchor(fragment);
        })
    };

    let menu_class = if *menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
            {r#".top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 5000;
                background: transparent;
                transition: background 0.3s ease;
            }
            .top-nav.scrolled { background: rgba(26, 26, 26, 0.95); }
            .nav-content {
                max-width: 1100px;
                margin: 0 auto;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 1rem;
            }
            .nav-logo { color: #fff; font-weight: 700; font-size: 1.25rem; text-decoration: none; }
            .nav-menu { display: flex; gap: 1.5rem; }
            .nav-link { color: #fff; text-decoration: none; }
            .burger-menu { display: none; background: none; border: none; cursor: pointer; }
            .burger-menu span { display: block; width: 24px; height: 2px; background: #fff; margin: 5px 0; }
            @media (max-width: 768px) {
                .burger-menu { display: block; }
                .nav-menu { display: none; }
                .nav-menu.mobile-menu-open {
                    display: flex;
                    flex-direction: column;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    background: rgba(26, 26, 26, 0.98);
                    padding: 1.5rem;
                }
            }"#}
            </style>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={nav_to("#hero")}>
                    {"Skybound Academy"}
                </a>
                <button
                    class="burger-menu"
                    aria-label="Меню"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(fragment, label)| html! {
                            <a
                                key={*fragment}
                                href={*fragment}
                                class="nav-link"
                                onclick={nav_to(*fragment)}
                            >
                                { *label }
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Skybound Academy frontend");
    yew::Renderer::<App>::new().render();
}
