use gloo::events::EventListener;
use web_sys::Event;

/// Optional lifecycle logging. Installed explicitly from the entry point
/// before mounting; nothing else depends on these listeners.
pub(crate) fn install() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if let Some(performance) = window.performance() {
        gloo::console::log!("page booted", format!("{:.0}ms", performance.now()));
    }

    let doc = document.clone();
    EventListener::new(&document, "visibilitychange", move |_event: &Event| {
        if doc.hidden() {
            gloo::console::log!("page hidden");
        } else {
            gloo::console::log!("page visible");
        }
    })
    .forget();

    EventListener::new(&window, "online", |_event: &Event| {
        gloo::console::log!("back online");
    })
    .forget();

    EventListener::new(&window, "offline", |_event: &Event| {
        gloo::console::log!("offline");
    })
    .forget();
}
