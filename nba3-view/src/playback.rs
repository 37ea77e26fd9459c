//! Timeline playback over the active window.
//!
//! This is only the state machine. The repeating timer that calls
//! [`Timeline::advance`] belongs to the UI, which must cancel it when
//! playback stops.

use nba3_core::YearWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    window: YearWindow,
    cursor: i32,
    playing: bool,
}

impl Timeline {
    pub fn new(window: YearWindow) -> Self {
        Self {
            window,
            cursor: window.start(),
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The highlighted season while playing.
    pub fn current_year(&self) -> Option<i32> {
        self.playing.then_some(self.cursor)
    }

    /// Start from the window's first season, or stop. Returns whether the
    /// timeline is playing afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.stop();
        } else {
            self.cursor = self.window.start();
            self.playing = true;
        }
        self.playing
    }

    /// Step one season, wrapping from the last back to the first.
    /// `None` when stopped.
    pub fn advance(&mut self) -> Option<i32> {
        if !self.playing {
            return None;
        }
        self.cursor = if self.cursor >= self.window.end() {
            self.window.start()
        } else {
            self.cursor + 1
        };
        Some(self.cursor)
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Follow a window change, keeping the cursor inside it.
    pub fn retarget(&mut self, window: YearWindow) {
        self.window = window;
        self.cursor = self.cursor.clamp(window.start(), window.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_at_window_end() {
        let mut timeline = Timeline::new(YearWindow::new(2021, 2023).unwrap());
        assert_eq!(timeline.advance(), None);
        assert!(timeline.toggle());
        assert_eq!(timeline.current_year(), Some(2021));
        let steps: Vec<Option<i32>> = (0..4).map(|_| timeline.advance()).collect();
        assert_eq!(steps, vec![Some(2022), Some(2023), Some(2021), Some(2022)]);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timeline = Timeline::new(YearWindow::full());
        timeline.toggle();
        timeline.stop();
        timeline.stop();
        assert!(!timeline.is_playing());
        assert_eq!(timeline.current_year(), None);
        assert_eq!(timeline.advance(), None);
    }

    #[test]
    fn playing_loop_ends_when_stopped_mid_run() {
        let mut timeline = Timeline::new(YearWindow::new(2004, 2006).unwrap());
        timeline.toggle();
        let mut ticks = Vec::new();
        while let Some(year) = timeline.advance() {
            ticks.push(year);
            if ticks.len() == 4 {
                timeline.stop();
            }
        }
        assert_eq!(ticks, vec![2005, 2006, 2004, 2005]);
        assert!(!timeline.is_playing());
        assert_eq!(timeline.advance(), None);
    }

    #[test]
    fn toggle_restarts_from_window_start() {
        let mut timeline = Timeline::new(YearWindow::new(2010, 2015).unwrap());
        timeline.toggle();
        timeline.advance();
        timeline.advance();
        assert!(!timeline.toggle());
        assert!(timeline.toggle());
        assert_eq!(timeline.current_year(), Some(2010));
    }

    #[test]
    fn retarget_clamps_cursor() {
        let mut timeline = Timeline::new(YearWindow::new(2004, 2024).unwrap());
        timeline.toggle();
        for _ in 0..15 {
            timeline.advance();
        }
        assert_eq!(timeline.current_year(), Some(2019));
        timeline.retarget(YearWindow::new(2009, 2014).unwrap());
        assert_eq!(timeline.current_year(), Some(2014));
        assert_eq!(timeline.advance(), Some(2009));
    }
}
