/// Carousel position and per-photo load state
///
/// The carousel owns the memory records plus one load slot per photo.
/// Navigation wraps around in both directions; a photo that failed to
/// fetch keeps its slot and is rendered as an inline fallback panel.

use iced::time::Instant;
use iced::widget::image;

use crate::media::fetch::FetchError;
use crate::state::data::Memory;

/// Load state of one photo
#[derive(Debug, Clone)]
pub enum PhotoState {
    /// Fetch in flight
    Loading,
    /// Decoded and ready to draw
    Ready(image::Handle),
    /// Fetch or decode failed; shown as a fallback panel, never retried
    Failed(FetchError),
}

#[derive(Debug)]
pub struct Carousel {
    memories: Vec<Memory>,
    photos: Vec<PhotoState>,
    current: usize,
    /// When the visible slide last changed, for the fade-in
    changed_at: Option<Instant>,
}

impl Carousel {
    pub fn new(memories: Vec<Memory>) -> Self {
        let photos = vec![PhotoState::Loading; memories.len()];
        Self {
            memories,
            photos,
            current: 0,
            changed_at: None,
        }
    }

    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The visible memory and its load state
    pub fn current(&self) -> (&Memory, &PhotoState) {
        (&self.memories[self.current], &self.photos[self.current])
    }

    pub fn next(&mut self, now: Instant) {
        if !self.is_empty() {
            self.current = (self.current + 1) % self.len();
            self.changed_at = Some(now);
        }
    }

    pub fn previous(&mut self, now: Instant) {
        if !self.is_empty() {
            self.current = (self.current + self.len() - 1) % self.len();
            self.changed_at = Some(now);
        }
    }

    /// Jump straight to a slide; out-of-range indices are ignored
    pub fn jump(&mut self, index: usize, now: Instant) {
        if index < self.len() && index != self.current {
            self.current = index;
            self.changed_at = Some(now);
        }
    }

    /// Record the outcome of a background fetch for slot `index`
    pub fn resolve(&mut self, index: usize, result: Result<image::Handle, FetchError>) {
        if let Some(slot) = self.photos.get_mut(index) {
            *slot = match result {
                Ok(handle) => PhotoState::Ready(handle),
                Err(error) => PhotoState::Failed(error),
            };
        }
    }

    /// Seconds since the visible slide changed (large before any change,
    /// so the first slide renders fully opaque)
    pub fn slide_elapsed(&self, now: Instant) -> f32 {
        match self.changed_at {
            Some(changed) => now.duration_since(changed).as_secs_f32(),
            None => f32::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data;

    fn carousel() -> Carousel {
        Carousel::new(data::memories())
    }

    #[test]
    fn test_next_wraps_around() {
        let mut c = carousel();
        let now = Instant::now();

        for expected in [1, 2, 3, 0, 1] {
            c.next(now);
            assert_eq!(c.current_index(), expected);
        }
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut c = carousel();
        let now = Instant::now();

        c.previous(now);
        assert_eq!(c.current_index(), c.len() - 1);
        c.previous(now);
        assert_eq!(c.current_index(), c.len() - 2);
    }

    #[test]
    fn test_jump_ignores_out_of_range() {
        let mut c = carousel();
        let now = Instant::now();

        c.jump(2, now);
        assert_eq!(c.current_index(), 2);

        c.jump(99, now);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_failed_fetch_marks_only_its_slot() {
        let mut c = carousel();

        c.resolve(1, Err(FetchError::Status(403)));
        c.resolve(0, Ok(image::Handle::from_rgba(1, 1, vec![255, 0, 0, 255])));

        assert!(matches!(c.photos[0], PhotoState::Ready(_)));
        assert!(matches!(c.photos[1], PhotoState::Failed(_)));
        assert!(matches!(c.photos[2], PhotoState::Loading));

        // Navigation is unaffected by failures
        let now = Instant::now();
        c.jump(1, now);
        assert_eq!(c.current_index(), 1);
    }
}
