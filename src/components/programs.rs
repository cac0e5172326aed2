//! Programs section: category/difficulty filters, sorting and a grid/list
//! view toggle over a typed program list.

use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Tandem,
    Training,
    Flight,
}

impl Category {
    fn label(self) -> &'static str {
        match self {
            Category::Tandem => "Тандем",
            Category::Training => "Обучение",
            Category::Flight => "Полёты",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Clone, PartialEq)]
pub struct Program {
    pub name: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub featured: bool,
    pub price: u32,
    pub duration_hours: u32,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Filter {
    All,
    Beginner,
    Featured,
    Category(Category),
}

impl Filter {
    fn label(self) -> &'static str {
        match self {
            Filter::All => "Все",
            Filter::Beginner => "Для новичков",
            Filter::Featured => "Популярные",
            Filter::Category(category) => category.label(),
        }
    }
}

pub const FILTERS: &[Filter] = &[
    Filter::All,
    Filter::Beginner,
    Filter::Featured,
    Filter::Category(Category::Tandem),
    Filter::Category(Category::Training),
    Filter::Category(Category::Flight),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortBy {
    Default,
    PriceAsc,
    PriceDesc,
    Name,
    Duration,
}

impl SortBy {
    fn from_value(value: &str) -> Self {
        match value {
            "price-asc" => SortBy::PriceAsc,
            "price-desc" => SortBy::PriceDesc,
            "name" => SortBy::Name,
            "duration" => SortBy::Duration,
            _ => SortBy::Default,
        }
    }
}

pub fn matches(program: &Program, filter: Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::Beginner => program.difficulty == Difficulty::Beginner,
        Filter::Featured => program.featured,
        Filter::Category(category) => program.category == category,
    }
}

pub fn visible_programs(programs: &[Program], filter: Filter, sort: SortBy) -> Vec<Program> {
    let mut visible: Vec<Program> = programs
        .iter()
        .filter(|p| matches(p, filter))
        .cloned()
        .collect();
    match sort {
        SortBy::Default => {}
        SortBy::PriceAsc => visible.sort_by_key(|p| p.price),
        SortBy::PriceDesc => visible.sort_by_key(|p| std::cmp::Reverse(p.price)),
        SortBy::Name => visible.sort_by(|a, b| a.name.cmp(b.name)),
        // Longest programs first, matching the original ordering.
        SortBy::Duration => visible.sort_by_key(|p| std::cmp::Reverse(p.duration_hours)),
    }
    visible
}

#[derive(Properties, PartialEq)]
pub struct ProgramsSectionProps {
    pub programs: Vec<Program>,
}

#[function_component(ProgramsSection)]
pub fn programs_section(props: &ProgramsSectionProps) -> Html {
    let filter = use_state(|| Filter::All);
    let sort = use_state(|| SortBy::Default);
    let list_view = use_state(|| false);

    let on_filter = |next: Filter| {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(next))
    };

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            sort.set(SortBy::from_value(&select.value()));
        })
    };

    let on_toggle_view = {
        let list_view = list_view.clone();
        Callback::from(move |_: MouseEvent| list_view.set(!*list_view))
    };

    let visible = visible_programs(&props.programs, *filter, *sort);

    html! {
        <section id="programs" class="programs-section">
            <style>
            {r#".programs-section { padding: 4rem 1rem; max-width: 1100px; margin: 0 auto; }
            .programs-toolbar { display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: center; margin-bottom: 1.5rem; }
            .programs-toolbar .filter-btn { border: 1px solid #ccc; background: #fff; border-radius: 20px; padding: 0.4rem 1rem; cursor: pointer; }
            .programs-toolbar .filter-btn.active { background: #007bff; color: #fff; border-color: #007bff; }
            .programs-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; }
            .programs-grid.list-view { grid-template-columns: 1fr; }
            .program-card { border: 1px solid #e3e3e3; border-radius: 12px; padding: 1.5rem; }
            .program-card .meta { color: #666; font-size: 0.875rem; }"#}
            </style>
            <h2>{"Программы"}</h2>
            <div class="programs-toolbar">
                {
                    FILTERS.iter().map(|f| {
                        let active = *f == *filter;
                        html! {
                            <button
                                class={classes!("filter-btn", active.then(|| "active"))}
                                onclick={on_filter(*f)}
                            >
                                { f.label() }
                            </button>
                        }
                    }).collect::<Html>()
                }
                <select onchange={on_sort} aria-label="Сортировка">
                    <option value="default">{"По умолчанию"}</option>
                    <option value="price-asc">{"Цена: по возрастанию"}</option>
                    <option value="price-desc">{"Цена: по убыванию"}</option>
                    <option value="name">{"По названию"}</option>
                    <option value="duration">{"По длительности"}</option>
                </select>
                <button onclick={on_toggle_view}>
                    { if *list_view { "Сетка" } else { "Список" } }
                </button>
            </div>
            {
                if visible.is_empty() {
                    html! { <p id="no-results">{"Программы не найдены. Попробуйте другой фильтр."}</p> }
                } else {
                    html! {
                        <div class={classes!("programs-grid", (*list_view).then(|| "list-view"))}>
                            {
                                visible.iter().map(|program| html! {
                                    <div class="program-card" key={program.name}>
                                        <h3>{ program.name }</h3>
                                        <p>{ program.description }</p>
                                        <p class="meta">
                                            { format!("{} · {} ч · {} ₽", program.category.label(), program.duration_hours, program.price) }
                                        </p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    }
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Program> {
        vec![
            Program {
                name: "Тандем-прыжок",
                category: Category::Tandem,
                difficulty: Difficulty::Beginner,
                featured: true,
                price: 15_000,
                duration_hours: 3,
                description: "",
            },
            Program {
                name: "Курс AFF",
                category: Category::Training,
                difficulty: Difficulty::Intermediate,
                featured: true,
                price: 85_000,
                duration_hours: 40,
                description: "",
            },
            Program {
                name: "Аэротруба",
                category: Category::Flight,
                difficulty: Difficulty::Beginner,
                featured: false,
                price: 6_000,
                duration_hours: 1,
                description: "",
            },
        ]
    }

    #[test]
    fn filter_all_keeps_everything() {
        assert_eq!(visible_programs(&sample(), Filter::All, SortBy::Default).len(), 3);
    }

    #[test]
    fn filter_beginner_matches_difficulty_not_category() {
        let visible = visible_programs(&sample(), Filter::Beginner, SortBy::Default);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.difficulty == Difficulty::Beginner));
    }

    #[test]
    fn filter_featured_and_category() {
        assert_eq!(visible_programs(&sample(), Filter::Featured, SortBy::Default).len(), 2);
        let tandem = visible_programs(&sample(), Filter::Category(Category::Tandem), SortBy::Default);
        assert_eq!(tandem.len(), 1);
        assert_eq!(tandem[0].name, "Тандем-прыжок");
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let only_advanced: Vec<Program> = sample()
            .into_iter()
            .filter(|p| p.difficulty == Difficulty::Advanced)
            .collect();
        assert!(visible_programs(&only_advanced, Filter::Beginner, SortBy::Default).is_empty());
    }

    #[test]
    fn sorting_orders() {
        let by_price: Vec<u32> = visible_programs(&sample(), Filter::All, SortBy::PriceAsc)
            .iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(by_price, vec![6_000, 15_000, 85_000]);

        let by_price_desc: Vec<u32> = visible_programs(&sample(), Filter::All, SortBy::PriceDesc)
            .iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(by_price_desc, vec![85_000, 15_000, 6_000]);

        let by_duration: Vec<u32> = visible_programs(&sample(), Filter::All, SortBy::Duration)
            .iter()
            .map(|p| p.duration_hours)
            .collect();
        assert_eq!(by_duration, vec![40, 3, 1]);
    }

    #[test]
    fn sort_values_parse_from_the_select() {
        assert_eq!(SortBy::from_value("price-asc"), SortBy::PriceAsc);
        assert_eq!(SortBy::from_value("duration"), SortBy::Duration);
        assert_eq!(SortBy::from_value("anything-else"), SortBy::Default);
    }
}
