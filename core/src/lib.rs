pub mod carousel;
pub mod gallery;
pub mod project;
pub mod swipe;

pub use carousel::{Carousel, CarouselEvent};
pub use gallery::{filter_by_category, search_projects, GalleryView};
pub use project::{ParseError, Project, ProjectCollection, WILDCARD_CATEGORY};
pub use swipe::{SwipeTrack, SWIPE_THRESHOLD};
