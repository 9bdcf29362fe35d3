use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use jakpum_core::gallery::GalleryView;
use jakpum_core::project::{Project, ProjectCollection, WILDCARD_CATEGORY};

use crate::app_router;
use crate::store::{self, StoreError};

enum LoadPhase {
    Loading,
    Ready(Rc<ProjectCollection>),
    Failed(StoreError),
}

#[function_component(GalleryApp)]
pub(crate) fn gallery_app() -> Html {
    let phase = use_state(|| LoadPhase::Loading);
    let view = use_state(GalleryView::new);
    let reload_nonce = use_state(|| 0u32);

    {
        let phase = phase.clone();
        use_effect_with(*reload_nonce, move |_| {
            spawn_local(async move {
                match store::load_projects().await {
                    Ok(collection) => phase.set(LoadPhase::Ready(Rc::new(collection))),
                    Err(err) => {
                        gloo::console::warn!("project load failed", err.to_string());
                        phase.set(LoadPhase::Failed(err));
                    }
                }
            });
            || ()
        });
    }

    let on_retry = {
        let phase = phase.clone();
        let reload_nonce = reload_nonce.clone();
        Callback::from(move |_: MouseEvent| {
            phase.set(LoadPhase::Loading);
            reload_nonce.set(reload_nonce.wrapping_add(1));
        })
    };

    let on_filter = {
        let view = view.clone();
        Callback::from(move |tag: String| {
            view.set(view.with_filter(&tag));
        })
    };

    let on_search = {
        let view = view.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            view.set(view.with_query(&input.value()));
        })
    };

    let body = match &*phase {
        LoadPhase::Loading => html! {
            <div class="loading"><p>{"Loading projects…"}</p></div>
        },
        LoadPhase::Failed(err) => render_load_error(err, on_retry),
        LoadPhase::Ready(collection) => render_gallery(collection, &view, on_filter, on_search),
    };

    html! {
        <main class="gallery-page">
            <header class="site-header">
                <h1>{"Jakpum Studio"}</h1>
                <p class="tagline">{"Selected design work"}</p>
            </header>
            { body }
        </main>
    }
}

fn render_gallery(
    collection: &Rc<ProjectCollection>,
    view: &GalleryView,
    on_filter: Callback<String>,
    on_search: Callback<InputEvent>,
) -> Html {
    let visible = view.visible(collection);
    let grid = if visible.is_empty() {
        html! {
            <div class="no-projects">
                <p>{"No projects match this selection."}</p>
            </div>
        }
    } else {
        visible.iter().map(|project| render_card(project)).collect::<Html>()
    };

    html! {
        <>
            <div class="gallery-controls">
                { render_filter_bar(collection, view.filter(), on_filter) }
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search projects"
                    value={view.query().to_string()}
                    oninput={on_search}
                />
            </div>
            <section class="projects-grid" aria-live="polite">
                { grid }
            </section>
        </>
    }
}

fn render_filter_bar(
    collection: &ProjectCollection,
    active: &str,
    on_filter: Callback<String>,
) -> Html {
    let mut tags = vec![WILDCARD_CATEGORY];
    tags.extend(collection.categories());
    let buttons = tags
        .into_iter()
        .map(|tag| {
            let is_active = tag == active;
            let onclick = {
                let on_filter = on_filter.clone();
                let tag = tag.to_string();
                Callback::from(move |_: MouseEvent| on_filter.emit(tag.clone()))
            };
            html! {
                <button
                    type="button"
                    class={classes!("filter-btn", is_active.then_some("active"))}
                    {onclick}
                >
                    { tag.to_string() }
                </button>
            }
        })
        .collect::<Html>();
    html! {
        <nav class="filter-bar">{ buttons }</nav>
    }
}

fn render_card(project: &Project) -> Html {
    let open = {
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| app_router::open_detail(&id))
    };
    let open_on_enter = {
        let id = project.id.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                app_router::open_detail(&id);
            }
        })
    };
    html! {
        <article
            class="project-card"
            key={project.id.clone()}
            tabindex="0"
            onclick={open}
            onkeydown={open_on_enter}
        >
            <img src={project.thumbnail.clone()} alt={project.title.clone()} loading="lazy" />
            <div class="project-info">
                <h3 class="project-title">{ project.title.clone() }</h3>
                <div class="project-meta">
                    <span>{ project.industry.clone() }</span>
                    <span>{ project.style.clone() }</span>
                </div>
                <p class="project-description">{ project.description.clone() }</p>
            </div>
        </article>
    }
}

fn render_load_error(err: &StoreError, on_retry: Callback<MouseEvent>) -> Html {
    html! {
        <div class="load-error">
            <p>{ format!("Could not load projects: {err}") }</p>
            <button type="button" class="retry-btn" onclick={on_retry}>{"Try again"}</button>
        </div>
    }
}
