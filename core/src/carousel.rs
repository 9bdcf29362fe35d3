#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    Previous,
    Next,
    JumpToFirst,
    JumpToLast,
    JumpTo(usize),
}

impl CarouselEvent {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(CarouselEvent::Previous),
            "ArrowRight" => Some(CarouselEvent::Next),
            "Home" => Some(CarouselEvent::JumpToFirst),
            "End" => Some(CarouselEvent::JumpToLast),
            _ => None,
        }
    }
}

/// Bounded wrap-around index over an image sequence. `count` is always
/// at least 1 and `index` stays in `[0, count)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    pub fn new(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self { index: 0, count })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn apply(self, event: CarouselEvent) -> Self {
        let index = match event {
            CarouselEvent::Previous => {
                if self.index == 0 {
                    self.count - 1
                } else {
                    self.index - 1
                }
            }
            CarouselEvent::Next => {
                if self.index + 1 == self.count {
                    0
                } else {
                    self.index + 1
                }
            }
            CarouselEvent::JumpToFirst => 0,
            CarouselEvent::JumpToLast => self.count - 1,
            CarouselEvent::JumpTo(target) if target < self.count => target,
            CarouselEvent::JumpTo(_) => self.index,
        };
        Self { index, ..self }
    }
}
