use std::fmt;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

use jakpum_core::carousel::{Carousel, CarouselEvent};
use jakpum_core::project::Project;
use jakpum_core::swipe::SwipeTrack;

use crate::app_router;
use crate::store::{self, StoreError};

pub(crate) const SITE_NAME: &str = "Jakpum Studio";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DetailError {
    MissingId,
    Store(StoreError),
    ProjectNotFound { id: String },
}

impl fmt::Display for DetailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailError::MissingId => write!(f, "no project id in the page address"),
            DetailError::Store(err) => err.fmt(f),
            DetailError::ProjectNotFound { id } => write!(f, "no project with id '{id}'"),
        }
    }
}

impl std::error::Error for DetailError {}

impl From<StoreError> for DetailError {
    fn from(err: StoreError) -> Self {
        DetailError::Store(err)
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub(crate) struct DetailProps {
    pub(crate) id: Option<String>,
}

#[derive(Clone)]
enum DetailPhase {
    Loading,
    Ready {
        project: Rc<Project>,
        carousel: Carousel,
    },
    Failed(DetailError),
}

#[function_component(DetailApp)]
pub(crate) fn detail_app(props: &DetailProps) -> Html {
    let phase = use_state(|| DetailPhase::Loading);
    let phase_live = use_mut_ref(|| DetailPhase::Loading);
    let swipe_origin = use_mut_ref(|| None::<SwipeTrack>);

    *phase_live.borrow_mut() = (*phase).clone();

    {
        let phase = phase.clone();
        let id = props.id.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match resolve_project(id).await {
                    Ok((project, carousel)) => {
                        set_page_title(&project.title);
                        phase.set(DetailPhase::Ready { project, carousel });
                    }
                    Err(err) => {
                        gloo::console::warn!("detail init failed", err.to_string());
                        phase.set(DetailPhase::Failed(err));
                    }
                }
            });
            || ()
        });
    }

    let dispatch = {
        let phase = phase.clone();
        let phase_live = phase_live.clone();
        Callback::from(move |event: CarouselEvent| {
            let current = phase_live.borrow().clone();
            if let DetailPhase::Ready { project, carousel } = current {
                let next = DetailPhase::Ready {
                    project,
                    carousel: carousel.apply(event),
                };
                *phase_live.borrow_mut() = next.clone();
                phase.set(next);
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        let phase_live = phase_live.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window available");
            let options = EventListenerOptions {
                phase: EventListenerPhase::Capture,
                passive: false,
            };
            let listener =
                EventListener::new_with_options(&window, "keydown", options, move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let Some(carousel_event) = CarouselEvent::from_key(&event.key()) else {
                        return;
                    };
                    if !matches!(&*phase_live.borrow(), DetailPhase::Ready { .. }) {
                        return;
                    }
                    event.prevent_default();
                    dispatch.emit(carousel_event);
                });
            || drop(listener)
        });
    }

    let on_touch_start = {
        let swipe_origin = swipe_origin.clone();
        Callback::from(move |event: TouchEvent| {
            let Some(touch) = event.touches().item(0) else {
                return;
            };
            *swipe_origin.borrow_mut() = Some(SwipeTrack::begin(
                touch.client_x() as f32,
                touch.client_y() as f32,
            ));
        })
    };

    let on_touch_end = {
        let swipe_origin = swipe_origin.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: TouchEvent| {
            let Some(track) = swipe_origin.borrow_mut().take() else {
                return;
            };
            let Some(touch) = event.changed_touches().item(0) else {
                return;
            };
            if let Some(carousel_event) =
                track.finish(touch.client_x() as f32, touch.client_y() as f32)
            {
                dispatch.emit(carousel_event);
            }
        })
    };

    let body = match &*phase {
        DetailPhase::Loading => html! {
            <div class="loading"><p>{"Loading project…"}</p></div>
        },
        DetailPhase::Failed(err) => render_detail_error(err),
        DetailPhase::Ready { project, carousel } => {
            render_project(project, *carousel, dispatch, on_touch_start, on_touch_end)
        }
    };

    html! {
        <main class="detail-page">
            { body }
        </main>
    }
}

async fn resolve_project(id: Option<String>) -> Result<(Rc<Project>, Carousel), DetailError> {
    let id = id.ok_or(DetailError::MissingId)?;
    let collection = store::load_projects().await?;
    let project = collection
        .by_id(&id)
        .cloned()
        .ok_or_else(|| DetailError::ProjectNotFound { id })?;
    // Collection validation guarantees at least one image.
    let Some(carousel) = Carousel::new(project.images.len()) else {
        return Err(DetailError::Store(StoreError::Parse {
            detail: format!("project '{}' has no images", project.id),
        }));
    };
    Ok((Rc::new(project), carousel))
}

fn set_page_title(title: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(&format!("{title} - {SITE_NAME}"));
}

fn render_project(
    project: &Rc<Project>,
    carousel: Carousel,
    dispatch: Callback<CarouselEvent>,
    on_touch_start: Callback<TouchEvent>,
    on_touch_end: Callback<TouchEvent>,
) -> Html {
    let index = carousel.index();
    let count = carousel.count();
    let main_src = project.images.get(index).cloned().unwrap_or_default();
    let main_alt = format!("{} - image {} of {}", project.title, index + 1, count);

    let on_previous = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(CarouselEvent::Previous))
    };
    let on_next = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(CarouselEvent::Next))
    };

    let thumbnails = project
        .images
        .iter()
        .enumerate()
        .map(|(thumb_index, image)| {
            let onclick = {
                let dispatch = dispatch.clone();
                Callback::from(move |_: MouseEvent| dispatch.emit(CarouselEvent::JumpTo(thumb_index)))
            };
            html! {
                <button
                    type="button"
                    class={classes!("thumbnail", (thumb_index == index).then_some("active"))}
                    {onclick}
                >
                    <img
                        src={image.clone()}
                        alt={format!("{} - thumbnail {}", project.title, thumb_index + 1)}
                    />
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <div class="project-header">
                <h1>{ project.title.clone() }</h1>
                <p class="description">{ project.description.clone() }</p>
            </div>

            <div class="project-info-grid">
                { render_info_item("Period", &project.period) }
                { render_info_item("Client", &project.client) }
                { render_info_item("Industry", &project.industry) }
                { render_info_item("Style", &project.style) }
            </div>

            <div class="image-gallery">
                <div class="gallery-main" ontouchstart={on_touch_start} ontouchend={on_touch_end}>
                    <img src={main_src} alt={main_alt} />
                </div>
                <div class="gallery-nav">
                    <button type="button" onclick={on_previous}>{"Previous"}</button>
                    <span class="gallery-position">{ format!("{} / {}", index + 1, count) }</span>
                    <button type="button" onclick={on_next}>{"Next"}</button>
                </div>
                <div class="gallery-thumbnails">
                    { thumbnails }
                </div>
            </div>

            <div class="color-display">
                <h3>{"Main color"}</h3>
                <div class="color-info">
                    <div
                        class="color-circle"
                        style={format!("background-color: {}", project.main_color)}
                    ></div>
                    <span class="color-code">{ project.main_color.clone() }</span>
                </div>
            </div>
        </>
    }
}

fn render_info_item(label: &str, value: &str) -> Html {
    html! {
        <div class="info-item">
            <h3>{ label.to_string() }</h3>
            <p>{ value.to_string() }</p>
        </div>
    }
}

fn render_detail_error(err: &DetailError) -> Html {
    html! {
        <div class="load-error">
            <p>{ format!("Could not open this project: {err}") }</p>
            <a class="back-link" href={app_router::LISTING_HREF}>{"Back to all projects"}</a>
        </div>
    }
}
