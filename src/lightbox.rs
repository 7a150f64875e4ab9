//! Lightbox slides and navigation.
//!
//! The lightbox pages through the whole filtered sequence, not just the
//! revealed prefix, starting at the clicked item. Navigation is finite:
//! stepping past either end stays put.

use crate::types::ArtworkItem;
use serde::Serialize;
use std::borrow::Borrow;

/// What the viewer needs to show one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub description: String,
}

impl From<&ArtworkItem> for Slide {
    fn from(item: &ArtworkItem) -> Self {
        Self {
            src: item.image_path.clone(),
            alt: item.title.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
        }
    }
}

/// One slide per item, in order.
pub fn slides<T: Borrow<ArtworkItem>>(items: &[T]) -> Vec<Slide> {
    items.iter().map(|i| Slide::from(i.borrow())).collect()
}

/// An open lightbox positioned on one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    slides: Vec<Slide>,
    index: usize,
}

impl Viewer {
    /// Open at `start`. Returns `None` when `start` is out of range.
    pub fn open(slides: Vec<Slide>, start: usize) -> Option<Self> {
        (start < slides.len()).then_some(Self {
            slides,
            index: start,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    /// Step forward. Returns false at the last slide.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.slides.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Step back. Returns false at the first slide.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn slide_mirrors_item() {
        let items = sample_items();
        let slide = Slide::from(&items[0]);
        assert_eq!(slide.src, "/images/1.jpg");
        assert_eq!(slide.alt, "Grandmother");
        assert_eq!(slide.title, "Grandmother");
        assert_eq!(slide.description, "Charcoal study of my grandmother");
    }

    #[test]
    fn slides_keep_order() {
        let items = sample_items();
        let refs: Vec<&ArtworkItem> = items.iter().rev().collect();
        let titles: Vec<String> = slides(&refs).into_iter().map(|s| s.title).collect();
        assert_eq!(titles[0], "Mountain Lake");
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn open_out_of_range_is_none() {
        let items = sample_items();
        assert!(Viewer::open(slides(&items), 6).is_none());
        assert!(Viewer::open(Vec::new(), 0).is_none());
    }

    #[test]
    fn navigation_is_finite() {
        let items = sample_items();
        let mut viewer = Viewer::open(slides(&items[..3]), 0).unwrap();
        assert!(!viewer.prev());
        assert_eq!(viewer.index(), 0);
        assert!(viewer.next());
        assert!(viewer.next());
        assert!(!viewer.next());
        assert_eq!(viewer.index(), 2);
        assert_eq!(viewer.current().title, "Self Portrait");
        assert!(viewer.prev());
        assert_eq!(viewer.index(), 1);
    }
}
