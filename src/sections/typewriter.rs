//! Typewriter headline: types each string, holds, erases, moves on.
//!
//! Timing is deterministic (no per-keystroke jitter), so the same tick
//! sequence always yields the same text. With smart backspace, erasing stops
//! at the prefix the current string shares with the next one; wrapping from
//! the last string back to the first always erases fully.

use crate::config::TypewriterConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    Holding,
    Erasing,
    Done,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    strings: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    stop: usize,
    phase: TypewriterPhase,
    /// Time until the next step (ms).
    pending_ms: f32,
}

impl Typewriter {
    /// Empty strings are skipped. With nothing to type the typewriter is done
    /// immediately.
    pub fn new<S: AsRef<str>>(strings: &[S], config: TypewriterConfig) -> Self {
        let strings: Vec<Vec<char>> = strings
            .iter()
            .map(|s| s.as_ref().chars().collect::<Vec<_>>())
            .filter(|s| !s.is_empty())
            .collect();

        let phase = if strings.is_empty() {
            TypewriterPhase::Done
        } else {
            TypewriterPhase::Typing
        };

        Self {
            pending_ms: config.start_delay_ms + config.type_speed_ms,
            config,
            strings,
            index: 0,
            shown: 0,
            stop: 0,
            phase,
        }
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == TypewriterPhase::Done
    }

    /// Index of the string being typed or erased.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Visible text.
    pub fn text(&self) -> String {
        self.strings
            .get(self.index)
            .map(|s| s[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Advance time. Returns true when the visible text changed.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.is_done() || dt_ms <= 0.0 {
            return false;
        }

        let before = (self.index, self.shown);
        self.pending_ms -= dt_ms;

        while self.pending_ms <= 0.0 && !self.is_done() {
            let cost = self.step();
            self.pending_ms += cost;
        }

        before != (self.index, self.shown)
    }

    /// Perform one step and return the delay until the next.
    fn step(&mut self) -> f32 {
        match self.phase {
            TypewriterPhase::Typing => {
                self.shown += 1;
                self.after_type()
            },
            TypewriterPhase::Holding => {
                self.phase = TypewriterPhase::Erasing;
                self.stop = self.erase_stop();
                self.after_erase()
            },
            TypewriterPhase::Erasing => {
                self.shown -= 1;
                self.after_erase()
            },
            TypewriterPhase::Done => 0.0,
        }
    }

    fn after_type(&mut self) -> f32 {
        if self.shown < self.current_len() {
            return self.config.type_speed_ms;
        }

        let last = self.index + 1 == self.strings.len();
        if last && !self.config.loop_strings {
            log::trace!("[SECTIONS] Typewriter finished");
            self.phase = TypewriterPhase::Done;
            return 0.0;
        }

        self.phase = TypewriterPhase::Holding;
        self.config.back_delay_ms
    }

    fn after_erase(&mut self) -> f32 {
        if self.shown > self.stop {
            return self.config.back_speed_ms;
        }

        self.index = (self.index + 1) % self.strings.len();
        self.phase = TypewriterPhase::Typing;
        // Next string may already be complete (it is a prefix of the old one)
        if self.shown >= self.current_len() {
            self.shown = self.current_len();
            return self.after_type();
        }
        self.config.type_speed_ms
    }

    fn current_len(&self) -> usize {
        self.strings.get(self.index).map_or(0, Vec::len)
    }

    fn erase_stop(&self) -> usize {
        let next = self.index + 1;
        if !self.config.smart_backspace || next >= self.strings.len() {
            return 0;
        }

        let current = &self.strings[self.index][..self.shown];
        current
            .iter()
            .zip(&self.strings[next])
            .take_while(|(a, b)| a == b)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TypewriterConfig {
        TypewriterConfig::default()
    }

    #[test]
    fn test_types_one_char_per_step() {
        let mut tw = Typewriter::new(&["abc"], config());
        assert_eq!(tw.text(), "");

        assert!(tw.tick(50.0));
        assert_eq!(tw.text(), "a");
        assert!(!tw.tick(49.0));
        assert!(tw.tick(1.0));
        assert_eq!(tw.text(), "ab");
    }

    #[test]
    fn test_holds_then_erases_fully_on_wrap() {
        let mut tw = Typewriter::new(&["ab"], config());
        tw.tick(100.0);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), TypewriterPhase::Holding);

        tw.tick(1499.0);
        assert_eq!(tw.text(), "ab");

        // hold ends, first backspace 25ms later
        tw.tick(1.0);
        tw.tick(25.0);
        assert_eq!(tw.text(), "a");
        tw.tick(25.0);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), TypewriterPhase::Typing);

        tw.tick(50.0);
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_smart_backspace_keeps_shared_prefix() {
        let mut tw = Typewriter::new(&["BIM Lead", "BIM Coordinator"], config());
        tw.tick(8.0 * 50.0);
        assert_eq!(tw.text(), "BIM Lead");

        // hold, then 4 backspaces down to "BIM "
        tw.tick(1500.0 + 4.0 * 25.0);
        assert_eq!(tw.text(), "BIM ");
        assert_eq!(tw.current_index(), 1);

        tw.tick(50.0);
        assert_eq!(tw.text(), "BIM C");
    }

    #[test]
    fn test_no_smart_backspace_erases_everything() {
        let cfg = TypewriterConfig {
            smart_backspace: false,
            ..config()
        };
        let mut tw = Typewriter::new(&["ab", "ac"], cfg);
        tw.tick(100.0 + 1500.0 + 50.0);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.current_index(), 1);
    }

    #[test]
    fn test_next_string_is_prefix() {
        let mut tw = Typewriter::new(&["abcd", "ab"], config());
        tw.tick(200.0);
        tw.tick(1500.0 + 50.0);
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.current_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Holding);
    }

    #[test]
    fn test_stops_without_loop() {
        let cfg = TypewriterConfig {
            loop_strings: false,
            ..config()
        };
        let mut tw = Typewriter::new(&["a", "b"], cfg);
        tw.tick(10_000.0);
        assert!(tw.is_done());
        assert_eq!(tw.text(), "b");
        assert!(!tw.tick(10_000.0));
    }

    #[test]
    fn test_start_delay() {
        let cfg = TypewriterConfig {
            start_delay_ms: 300.0,
            ..config()
        };
        let mut tw = Typewriter::new(&["x"], cfg);
        assert!(!tw.tick(300.0));
        assert!(tw.tick(50.0));
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_empty_input() {
        let none: [&str; 0] = [];
        let tw = Typewriter::new(&none, config());
        assert!(tw.is_done());
        assert_eq!(tw.text(), "");

        let blanks = Typewriter::new(&["", ""], config());
        assert!(blanks.is_done());
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new(&["Bé–ü"], config());
        tw.tick(150.0);
        assert_eq!(tw.text(), "Bé–ü".chars().take(3).collect::<String>());
    }
}
