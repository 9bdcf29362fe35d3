use jakpum_core::carousel::{Carousel, CarouselEvent};

#[test]
fn next_cycles_back_to_start() {
    let count = 5;
    let mut carousel = Carousel::new(count).expect("non-empty carousel");
    for _ in 0..count {
        carousel = carousel.apply(CarouselEvent::Next);
    }
    assert_eq!(carousel.index(), 0);
}

#[test]
fn previous_cycles_back_to_start() {
    let count = 5;
    let mut carousel = Carousel::new(count).expect("non-empty carousel");
    for _ in 0..count {
        carousel = carousel.apply(CarouselEvent::Previous);
    }
    assert_eq!(carousel.index(), 0);
}

#[test]
fn previous_from_first_wraps_to_last() {
    let carousel = Carousel::new(4).expect("non-empty carousel");
    let carousel = carousel
        .apply(CarouselEvent::JumpToFirst)
        .apply(CarouselEvent::Previous);
    assert_eq!(carousel.index(), 3);
}

#[test]
fn next_from_last_wraps_to_first() {
    let carousel = Carousel::new(4).expect("non-empty carousel");
    let carousel = carousel
        .apply(CarouselEvent::JumpToLast)
        .apply(CarouselEvent::Next);
    assert_eq!(carousel.index(), 0);
}

#[test]
fn jump_targets_exact_index() {
    let carousel = Carousel::new(6).expect("non-empty carousel");
    assert_eq!(carousel.apply(CarouselEvent::JumpTo(4)).index(), 4);
    assert_eq!(carousel.apply(CarouselEvent::JumpToLast).index(), 5);
    assert_eq!(
        carousel
            .apply(CarouselEvent::JumpToLast)
            .apply(CarouselEvent::JumpToFirst)
            .index(),
        0
    );
}

#[test]
fn out_of_range_jump_is_ignored() {
    let carousel = Carousel::new(3)
        .expect("non-empty carousel")
        .apply(CarouselEvent::JumpTo(2));
    assert_eq!(carousel.apply(CarouselEvent::JumpTo(3)).index(), 2);
    assert_eq!(carousel.apply(CarouselEvent::JumpTo(99)).index(), 2);
}

#[test]
fn single_image_carousel_stays_put() {
    let carousel = Carousel::new(1).expect("non-empty carousel");
    assert_eq!(carousel.apply(CarouselEvent::Next).index(), 0);
    assert_eq!(carousel.apply(CarouselEvent::Previous).index(), 0);
    assert_eq!(carousel.apply(CarouselEvent::JumpToLast).index(), 0);
}

#[test]
fn empty_image_set_has_no_carousel() {
    assert!(Carousel::new(0).is_none());
}

#[test]
fn arrow_and_edge_keys_map_to_events() {
    assert_eq!(
        CarouselEvent::from_key("ArrowLeft"),
        Some(CarouselEvent::Previous)
    );
    assert_eq!(
        CarouselEvent::from_key("ArrowRight"),
        Some(CarouselEvent::Next)
    );
    assert_eq!(
        CarouselEvent::from_key("Home"),
        Some(CarouselEvent::JumpToFirst)
    );
    assert_eq!(
        CarouselEvent::from_key("End"),
        Some(CarouselEvent::JumpToLast)
    );
}

#[test]
fn other_keys_map_to_nothing() {
    assert_eq!(CarouselEvent::from_key("ArrowUp"), None);
    assert_eq!(CarouselEvent::from_key("Enter"), None);
    assert_eq!(CarouselEvent::from_key("a"), None);
}
