use std::fmt;

use serde::Deserialize;

/// Reserved filter tag meaning "no filter"; never a valid project category.
pub const WILDCARD_CATEGORY: &str = "all";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub period: String,
    pub client: String,
    pub industry: String,
    pub style: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub main_color: String,
}

#[derive(Deserialize)]
struct ProjectDocument {
    projects: Vec<Project>,
}

/// Ordered project records behind a validated constructor. Never mutated
/// after load; filtering always produces a derived view.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCollection {
    projects: Vec<Project>,
}

impl ProjectCollection {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let document: ProjectDocument =
            serde_json::from_str(text).map_err(|err| ParseError::Syntax(err.to_string()))?;
        Self::from_projects(document.projects)
    }

    pub fn from_projects(projects: Vec<Project>) -> Result<Self, ParseError> {
        for (index, project) in projects.iter().enumerate() {
            if project.images.is_empty() {
                return Err(ParseError::NoImages {
                    id: project.id.clone(),
                });
            }
            if project.category.eq_ignore_ascii_case(WILDCARD_CATEGORY) {
                return Err(ParseError::ReservedCategory {
                    id: project.id.clone(),
                });
            }
            if projects[..index].iter().any(|earlier| earlier.id == project.id) {
                return Err(ParseError::DuplicateId {
                    id: project.id.clone(),
                });
            }
        }
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Distinct category tags in first-seen order, wildcard excluded.
    pub fn categories(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for project in &self.projects {
            let tag = project.category.as_str();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    Syntax(String),
    DuplicateId { id: String },
    NoImages { id: String },
    ReservedCategory { id: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(detail) => write!(f, "malformed project document: {detail}"),
            ParseError::DuplicateId { id } => write!(f, "duplicate project id '{id}'"),
            ParseError::NoImages { id } => write!(f, "project '{id}' has no images"),
            ParseError::ReservedCategory { id } => {
                write!(f, "project '{id}' uses the reserved category '{WILDCARD_CATEGORY}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}
