/// Outcome of one typing tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTick {
    /// Typed text is now this many chars long.
    Typed(usize),
    /// The whole word has been on screen for a tick; time to pause.
    Finished,
}

/// Character-by-character reveal cycling through a fixed word list.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    index: usize,
    shown: usize,
    next: usize,
}

impl Typewriter {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            index: 0,
            shown: 0,
            next: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    /// The prefix of the current word that is on screen.
    pub fn typed(&self) -> &str {
        let word = self.current().unwrap_or_default();
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    pub fn tick(&mut self) -> TypeTick {
        let len = self.current().map_or(0, |w| w.chars().count());
        if self.is_empty() || self.next > len {
            return TypeTick::Finished;
        }
        self.shown = self.next;
        self.next += 1;
        TypeTick::Typed(self.shown)
    }

    /// Moves to the next word, wrapping at the end of the list, and restarts
    /// the reveal from an empty prefix.
    pub fn advance(&mut self) -> usize {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.words.len();
        }
        self.shown = 0;
        self.next = 0;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new(words(&["Next.js"]));
        assert_eq!(tw.typed(), "");
        let seen: Vec<String> = (0..8)
            .map(|_| {
                tw.tick();
                tw.typed().to_string()
            })
            .collect();
        assert_eq!(
            seen,
            vec!["", "N", "Ne", "Nex", "Next", "Next.", "Next.j", "Next.js"]
        );
        assert_eq!(tw.tick(), TypeTick::Finished);
        assert_eq!(tw.typed(), "Next.js");
    }

    #[test]
    fn test_wraps_after_last_word() {
        let list = [
            "React",
            "Next.js",
            "TypeScript",
            "Node.js",
            "Python",
            "PostgreSQL",
            "MongoDB",
            "AWS",
            "Docker",
            "GraphQL",
            "Tailwind CSS",
            "Vue.js",
        ];
        let mut tw = Typewriter::new(words(&list));
        for expected in 1..12 {
            assert_eq!(tw.advance(), expected);
        }
        assert_eq!(tw.index(), 11);
        assert_eq!(tw.advance(), 0);
        assert_eq!(tw.current(), Some("React"));
        assert_eq!(tw.typed(), "");
    }

    #[test]
    fn test_multibyte_words() {
        let mut tw = Typewriter::new(words(&["Añejo"]));
        tw.tick();
        tw.tick();
        tw.tick();
        assert_eq!(tw.typed(), "Añ");
    }

    #[test]
    fn test_empty_list() {
        let mut tw = Typewriter::new(Vec::new());
        assert_eq!(tw.tick(), TypeTick::Finished);
        assert_eq!(tw.advance(), 0);
        assert_eq!(tw.typed(), "");
        assert_eq!(tw.current(), None);
    }

    proptest! {
        #[test]
        fn prop_typed_is_growing_prefix(list in prop::collection::vec("\\PC{0,12}", 1..6), ticks in 0usize..60) {
            let mut tw = Typewriter::new(list);
            let mut prev_len = 0;
            for _ in 0..ticks {
                let word = tw.current().unwrap_or_default().to_string();
                match tw.tick() {
                    TypeTick::Typed(n) => {
                        let typed = tw.typed();
                        prop_assert!(word.starts_with(typed));
                        prop_assert_eq!(typed.chars().count(), n);
                        prop_assert!(n <= word.chars().count());
                        if n > 0 {
                            prop_assert_eq!(n, prev_len + 1);
                        }
                        prev_len = n;
                    }
                    TypeTick::Finished => {
                        prop_assert_eq!(tw.typed(), word.as_str());
                        let before = tw.index();
                        let after = tw.advance();
                        prop_assert_eq!(after, (before + 1) % tw.words.len());
                        prev_len = 0;
                    }
                }
            }
        }
    }
}
