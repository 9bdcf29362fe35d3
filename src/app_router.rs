/// Which page a location resolves to. The detail page is any path whose
/// final segment is `detail` (with or without an extension); everything
/// else is the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Gallery,
    Detail { id: Option<String> },
}

pub(crate) const LISTING_HREF: &str = "./";

pub(crate) fn current_route() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Gallery;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    resolve_route(&path, &search)
}

pub(crate) fn resolve_route(path: &str, search: &str) -> Route {
    if is_detail_path(path) {
        Route::Detail {
            id: project_id_from_query(search),
        }
    } else {
        Route::Gallery
    }
}

pub(crate) fn detail_href(id: &str) -> String {
    format!("detail?id={}", encode_query_value(id))
}

pub(crate) fn open_detail(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.location().assign(&detail_href(id));
}

fn is_detail_path(path: &str) -> bool {
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment.eq_ignore_ascii_case("detail")
        || segment.to_ascii_lowercase().starts_with("detail.")
}

fn project_id_from_query(search: &str) -> Option<String> {
    let raw = search.trim().trim_start_matches('?');
    if raw.is_empty() {
        return None;
    }
    for chunk in raw.split('&') {
        let mut iter = chunk.splitn(2, '=');
        let key = iter.next().unwrap_or("").trim();
        let value = iter.next().unwrap_or("").trim();
        if key == "id" {
            let id = decode_query_value(value);
            let id = id.trim();
            if id.is_empty() {
                return None;
            }
            return Some(id.to_string());
        }
    }
    None
}

fn decode_query_value(value: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::decode_uri_component(value)
            .ok()
            .and_then(|decoded| decoded.as_string())
            .unwrap_or_else(|| value.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        value.to_string()
    }
}

fn encode_query_value(value: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::encode_uri_component(value))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_paths_resolve_to_the_gallery() {
        assert_eq!(resolve_route("/", ""), Route::Gallery);
        assert_eq!(resolve_route("/index.html", ""), Route::Gallery);
        assert_eq!(resolve_route("/jakpum/", ""), Route::Gallery);
        assert_eq!(resolve_route("/details-of-work", "?id=a"), Route::Gallery);
    }

    #[test]
    fn detail_paths_resolve_to_the_detail_page() {
        assert_eq!(
            resolve_route("/detail", "?id=aurora"),
            Route::Detail {
                id: Some("aurora".to_string())
            }
        );
        assert_eq!(
            resolve_route("/detail.html", "?id=aurora"),
            Route::Detail {
                id: Some("aurora".to_string())
            }
        );
        assert_eq!(
            resolve_route("/work/detail.html", "?id=aurora"),
            Route::Detail {
                id: Some("aurora".to_string())
            }
        );
    }

    #[test]
    fn detail_without_an_id_keeps_none() {
        assert_eq!(resolve_route("/detail", ""), Route::Detail { id: None });
        assert_eq!(resolve_route("/detail", "?"), Route::Detail { id: None });
        assert_eq!(resolve_route("/detail", "?id="), Route::Detail { id: None });
        assert_eq!(
            resolve_route("/detail", "?from=grid"),
            Route::Detail { id: None }
        );
    }

    #[test]
    fn id_survives_other_query_parameters() {
        assert_eq!(
            resolve_route("/detail", "?from=grid&id=basalt"),
            Route::Detail {
                id: Some("basalt".to_string())
            }
        );
    }

    #[test]
    fn detail_href_carries_the_id() {
        assert_eq!(detail_href("aurora"), "detail?id=aurora");
    }
}
