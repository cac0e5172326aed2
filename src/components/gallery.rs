//! Image gallery: thumbnail strip swapping the main image with a short fade.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const FADE_MS: u32 = 150;

#[derive(Clone, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct GallerySectionProps {
    pub images: Vec<GalleryImage>,
}

#[function_component(GallerySection)]
pub fn gallery_section(props: &GallerySectionProps) -> Html {
    let current = use_state(|| 0usize);
    let fading = use_state(|| false);

    if props.images.is_empty() {
        return html! {};
    }

    let on_thumb = |index: usize| {
        let current = current.clone();
        let fading = fading.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            fading.set(true);
            let current = current.clone();
            let fading = fading.clone();
            Timeout::new(FADE_MS, move || {
                current.set(index);
                fading.set(false);
            })
            .forget();
        })
    };

    let main = &props.images[(*current).min(props.images.len() - 1)];

    html! {
        <section id="gallery" class="gallery-section">
            <style>
            {r#".gallery-section { padding: 4rem 1rem; max-width: 1100px; margin: 0 auto; }
            .gallery-main img { width: 100%; border-radius: 12px; transition: opacity 0.15s ease; }
            .gallery-thumbs { display: flex; gap: 0.75rem; margin-top: 1rem; }
            .gallery-thumb { border: 2px solid transparent; border-radius: 8px; padding: 0; background: none; cursor: pointer; }
            .gallery-thumb.active { border-color: #007bff; }
            .gallery-thumb img { width: 90px; height: 60px; object-fit: cover; border-radius: 6px; display: block; }"#}
            </style>
            <h2>{"Галерея"}</h2>
            <div class="gallery-main">
                <img
                    src={main.src}
                    alt={main.alt}
                    style={if *fading { "opacity: 0.5;" } else { "opacity: 1;" }}
                />
            </div>
            <div class="gallery-thumbs">
                {
                    props.images.iter().enumerate().map(|(i, image)| html! {
                        <button
                            key={i}
                            class={classes!("gallery-thumb", (i == *current).then(|| "active"))}
                            aria-label={format!("Показать фото {}", i + 1)}
                            onclick={on_thumb(i)}
                        >
                            <img src={image.src} alt={image.alt} />
                        </button>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
