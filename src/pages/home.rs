//! Single-page composition of the marketing site: hero slider, statistics,
//! programs, pricing, gallery, contact form, newsletter footer and the
//! exit-intent popup. Section data lives here; sections with no data simply
//! do not render their component.

use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::counters::StatCounter;
use crate::components::exit_popup::ExitPopup;
use crate::components::gallery::{GalleryImage, GallerySection};
use crate::components::hero_slider::{HeroSlider, Slide};
use crate::components::newsletter::NewsletterForm;
use crate::components::pricing::PricingSection;
use crate::components::programs::{Category, Difficulty, Program, ProgramsSection};
use crate::components::toast::{Notice, Toast};

fn slides() -> Vec<Slide> {
    vec![
        Slide {
            image: "/static/img/hero-tandem.jpg",
            title: "Прыгни с парашютом уже в эти выходные",
            subtitle: "Тандем-прыжок с высоты 4000 метров с опытным инструктором",
        },
        Slide {
            image: "/static/img/hero-aff.jpg",
            title: "Научись летать самостоятельно",
            subtitle: "Курс AFF — от первого прыжка до лицензии скайдайвера",
        },
        Slide {
            image: "/static/img/hero-sunset.jpg",
            title: "Небо ближе, чем кажется",
            subtitle: "Аэродром в 40 минутах от города, прыжки каждый день",
        },
    ]
}

fn programs() -> Vec<Program> {
    vec![
        Program {
            name: "Тандем-прыжок",
            category: Category::Tandem,
            difficulty: Difficulty::Beginner,
            featured: true,
            price: 15_000,
            duration_hours: 3,
            description: "Первый прыжок в связке с инструктором. Подготовка за один день.",
        },
        Program {
            name: "Тандем с видеосъёмкой",
            category: Category::Tandem,
            difficulty: Difficulty::Beginner,
            featured: false,
            price: 19_000,
            duration_hours: 3,
            description: "Тандем-прыжок с оператором: видео и фото свободного падения.",
        },
        Program {
            name: "Курс AFF",
            category: Category::Training,
            difficulty: Difficulty::Intermediate,
            featured: true,
            price: 85_000,
            duration_hours: 40,
            description: "Полный курс обучения самостоятельным прыжкам, 8 уровней.",
        },
        Program {
            name: "Статик-лайн",
            category: Category::Training,
            difficulty: Difficulty::Beginner,
            featured: false,
            price: 9_000,
            duration_hours: 8,
            description: "Самостоятельный прыжок с принудительным раскрытием купола.",
        },
        Program {
            name: "Полётное обучение",
            category: Category::Flight,
            difficulty: Difficulty::Advanced,
            featured: true,
            price: 45_000,
            duration_hours: 20,
            description: "Пилотирование купола и групповая акробатика для лицензированных.",
        },
        Program {
            name: "Аэротруба",
            category: Category::Flight,
            difficulty: Difficulty::Beginner,
            featured: false,
            price: 6_000,
            duration_hours: 1,
            description: "Свободное падение без прыжка: полёты в вертикальной аэротрубе.",
        },
    ]
}

fn gallery_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            src: "/static/img/gallery-freefall.jpg",
            alt: "Свободное падение над аэродромом",
        },
        GalleryImage {
            src: "/static/img/gallery-canopy.jpg",
            alt: "Полёт под куполом на закате",
        },
        GalleryImage {
            src: "/static/img/gallery-formation.jpg",
            alt: "Групповая формация в небе",
        },
        GalleryImage {
            src: "/static/img/gallery-landing.jpg",
            alt: "Приземление на площадку",
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    let notice = use_state(|| None::<Notice>);

    let on_notify = {
        let notice = notice.clone();
        Callback::from(move |n: Notice| notice.set(Some(n)))
    };

    let on_clear = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <main>
            <HeroSlider slides={slides()} />
            <section id="stats" class="stats-section">
                <style>
                {r#".stats-section { display: flex; flex-wrap: wrap; justify-content: center; gap: 3rem; padding: 3rem 1rem; background: #f7f9fb; }
                .stat-counter { display: flex; flex-direction: column; align-items: center; }
                .stat-value { font-size: 2.5rem; font-weight: 700; color: #007bff; }
                .stat-label { color: #666; }"#}
                </style>
                <StatCounter target={15} label="лет в небе" />
                <StatCounter target={25000} suffix="+" label="прыжков" />
                <StatCounter target={3500} suffix="+" label="учеников" />
                <StatCounter target={18} label="инструкторов" />
            </section>
            <ProgramsSection programs={programs()} />
            <PricingSection on_notify={on_notify.clone()} />
            <GallerySection images={gallery_images()} />
            <ContactSection />
            <footer class="site-footer">
                <style>
                {r#".site-footer { background: #1a1a1a; color: #fff; padding: 3rem 1rem; display: flex; flex-wrap: wrap; gap: 2rem; justify-content: space-between; }"#}
                </style>
                <div>
                    <h3>{"Skybound Academy"}</h3>
                    <p>{"Школа парашютного спорта. Прыгаем с 2011 года."}</p>
                </div>
                <div>
                    <h4>{"Рассылка"}</h4>
                    <NewsletterForm />
                </div>
            </footer>
            <ExitPopup on_notify={on_notify} />
            <Toast notice={(*notice).clone()} on_clear={on_clear} />
        </main>
    }
}
