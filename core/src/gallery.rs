use crate::project::{Project, ProjectCollection, WILDCARD_CATEGORY};

/// Listing-page view state: the active category filter plus the search
/// query. The visible subsequence is derived on demand, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryView {
    filter: String,
    query: String,
}

impl GalleryView {
    pub fn new() -> Self {
        Self {
            filter: WILDCARD_CATEGORY.to_string(),
            query: String::new(),
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn with_filter(&self, tag: &str) -> Self {
        Self {
            filter: tag.to_string(),
            query: self.query.clone(),
        }
    }

    #[must_use]
    pub fn with_query(&self, query: &str) -> Self {
        Self {
            filter: self.filter.clone(),
            query: query.to_string(),
        }
    }

    /// Category filter first, then the search query over the remainder.
    pub fn visible<'a>(&self, collection: &'a ProjectCollection) -> Vec<&'a Project> {
        let filtered = filter_by_category(collection.projects(), &self.filter);
        search_projects(filtered, &self.query)
    }
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new()
    }
}

/// The wildcard keeps everything; any other tag keeps the subsequence
/// with an equal category, original order preserved.
pub fn filter_by_category<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    if tag == WILDCARD_CATEGORY {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|project| project.category == tag)
        .collect()
}

/// Case-insensitive match over title, description, industry and style.
/// A blank query keeps everything.
pub fn search_projects<'a>(projects: Vec<&'a Project>, query: &str) -> Vec<&'a Project> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return projects;
    }
    projects
        .into_iter()
        .filter(|project| matches_query(project, &needle))
        .collect()
}

fn matches_query(project: &Project, needle: &str) -> bool {
    [
        &project.title,
        &project.description,
        &project.industry,
        &project.style,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: &str, title: &str) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} case study"),
            period: "2024.01 - 2024.04".to_string(),
            client: "Hanbit Co.".to_string(),
            industry: "Retail".to_string(),
            style: "Minimal".to_string(),
            category: category.to_string(),
            thumbnail: format!("images/{id}/thumb.jpg"),
            images: vec![format!("images/{id}/01.jpg")],
            main_color: "#334455".to_string(),
        }
    }

    fn collection() -> ProjectCollection {
        ProjectCollection::from_projects(vec![
            project("a", "branding", "Aurora"),
            project("b", "web", "Basalt"),
            project("c", "branding", "Cobalt"),
        ])
        .expect("valid fixture collection")
    }

    #[test]
    fn wildcard_keeps_everything_in_order() {
        let collection = collection();
        let visible = filter_by_category(collection.projects(), WILDCARD_CATEGORY);
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn category_filter_preserves_relative_order() {
        let collection = collection();
        let visible = filter_by_category(collection.projects(), "branding");
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn unknown_category_yields_empty() {
        let collection = collection();
        assert!(filter_by_category(collection.projects(), "editorial").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let collection = collection();
        let all: Vec<&Project> = collection.projects().iter().collect();
        let by_title = search_projects(all.clone(), "AURORA");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "a");
        let by_style = search_projects(all.clone(), "minimal");
        assert_eq!(by_style.len(), 3);
        let by_description = search_projects(all, "cobalt case");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "c");
    }

    #[test]
    fn blank_query_keeps_everything() {
        let collection = collection();
        let all: Vec<&Project> = collection.projects().iter().collect();
        assert_eq!(search_projects(all.clone(), "").len(), 3);
        assert_eq!(search_projects(all, "   ").len(), 3);
    }

    #[test]
    fn view_composes_filter_then_search() {
        let collection = collection();
        let view = GalleryView::new().with_filter("branding").with_query("cobalt");
        let visible = view.visible(&collection);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "c");
    }

    #[test]
    fn view_defaults_to_wildcard_and_blank_query() {
        let view = GalleryView::new();
        assert_eq!(view.filter(), WILDCARD_CATEGORY);
        assert_eq!(view.query(), "");
    }
}
