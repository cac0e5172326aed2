//! Slide-cycling state machine behind the hero slider.
//!
//! Index math and play/stop bookkeeping live here; the component owns the
//! actual `Interval` handle and only arms or cancels it when told to, which
//! keeps "at most one live timer" a local property of one `Option` field.

pub struct Carousel {
    len: usize,
    current: usize,
    playing: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            playing: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Jumps to slide `i`, wrapping negative and overflowing indices.
    /// Returns the active index, or `None` for an empty deck (no-op).
    pub fn go_to(&mut self, i: isize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.current = i.rem_euclid(self.len as isize) as usize;
        Some(self.current)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.current as isize + 1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.go_to(self.current as isize - 1)
    }

    /// Enters the playing state. Returns `true` when the caller must arm the
    /// autoplay timer; `false` when already playing or the deck is empty.
    pub fn start(&mut self) -> bool {
        if self.len == 0 || self.playing {
            return false;
        }
        self.playing = true;
        true
    }

    /// Leaves the playing state. Returns `true` when the caller must cancel
    /// the autoplay timer.
    pub fn stop(&mut self) -> bool {
        let was_playing = self.playing;
        self.playing = false;
        was_playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_wraps_in_both_directions() {
        let mut c = Carousel::new(4);
        assert_eq!(c.go_to(1), Some(1));
        assert_eq!(c.go_to(4), Some(0));
        assert_eq!(c.go_to(7), Some(3));
        assert_eq!(c.go_to(-1), Some(3));
        assert_eq!(c.go_to(-9), Some(3));
    }

    #[test]
    fn next_and_prev_are_adjacent_jumps() {
        let mut c = Carousel::new(3);
        assert_eq!(c.next(), Some(1));
        assert_eq!(c.next(), Some(2));
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.prev(), Some(2));
    }

    #[test]
    fn start_is_idempotent() {
        let mut c = Carousel::new(2);
        assert!(c.start());
        assert!(!c.start());
        assert!(c.is_playing());
    }

    #[test]
    fn stop_reports_whether_a_timer_was_live() {
        let mut c = Carousel::new(2);
        assert!(!c.stop());
        c.start();
        assert!(c.stop());
        assert!(!c.stop());
    }

    #[test]
    fn restart_converges_to_a_single_timer() {
        let mut c = Carousel::new(2);
        // restart is stop-then-start; from either state exactly one arm
        // request comes out of the pair.
        c.stop();
        assert!(c.start());
        assert!(c.stop());
        assert!(c.start());
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut c = Carousel::new(0);
        assert_eq!(c.go_to(5), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);
        assert!(!c.start());
        assert!(!c.stop());
        assert_eq!(c.current(), 0);
    }
}
