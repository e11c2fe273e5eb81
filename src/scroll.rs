pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 50.0;
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
pub const PARALLAX_FACTOR: f64 = 0.1;

/// A `section[id]` as laid out at the time of the tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionEntry {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionEntry {
    fn contains(&self, offset: f64) -> bool {
        let start = self.top - SECTION_ACTIVATION_OFFSET;
        offset >= start && offset < start + self.height
    }
}

/// Card position in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardBox {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub viewport_height: f64,
    pub sections: Vec<SectionEntry>,
    pub cards: Vec<CardBox>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Parallax {
    Translate(f64),
    Reset,
}

impl Parallax {
    pub fn transform(self) -> Option<String> {
        match self {
            Self::Translate(y) => Some(format!("translateY({y}px)")),
            Self::Reset => None,
        }
    }
}

/// What the DOM has to change after one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollFrame {
    pub navbar_scrolled: Option<bool>,
    pub active_section: Option<Option<String>>,
    /// One slot per card; `None` leaves that card untouched.
    pub parallax: Vec<Option<Parallax>>,
}

pub fn active_section(sections: &[SectionEntry], offset: f64) -> Option<&SectionEntry> {
    sections.iter().find(|section| section.contains(offset))
}

pub fn parallax_offset(card: CardBox, offset: f64, viewport_height: f64) -> Option<f64> {
    let visible = offset + viewport_height > card.top && offset < card.top + card.height;
    visible.then(|| -(offset - card.top) * PARALLAX_FACTOR)
}

/// Owns the scroll-derived page state between ticks.
#[derive(Debug, Default)]
pub struct ScrollController {
    navbar_scrolled: bool,
    active: Option<String>,
    translated: Vec<bool>,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn tick(&mut self, snapshot: &ScrollSnapshot) -> ScrollFrame {
        let mut frame = ScrollFrame::default();

        let scrolled = snapshot.offset > NAVBAR_SCROLLED_THRESHOLD;
        if scrolled != self.navbar_scrolled {
            self.navbar_scrolled = scrolled;
            frame.navbar_scrolled = Some(scrolled);
        }

        // No match keeps the previous highlight.
        if let Some(section) = active_section(&snapshot.sections, snapshot.offset) {
            if self.active.as_deref() != Some(section.id.as_str()) {
                self.active = Some(section.id.clone());
                frame.active_section = Some(self.active.clone());
            }
        }

        self.translated.resize(snapshot.cards.len(), false);
        frame.parallax = snapshot
            .cards
            .iter()
            .zip(self.translated.iter_mut())
            .map(|(card, translated)| {
                match parallax_offset(*card, snapshot.offset, snapshot.viewport_height) {
                    Some(y) => {
                        *translated = true;
                        Some(Parallax::Translate(y))
                    }
                    None if *translated => {
                        *translated = false;
                        Some(Parallax::Reset)
                    }
                    None => None,
                }
            })
            .collect();

        frame
    }
}
