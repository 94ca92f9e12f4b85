//! Prompt list and random selection.
//!
//! The prompt list is fixed at startup: either the built-in entries below or
//! a validated list from the config file. Selection is a uniform, independent
//! draw on every trigger, so immediate repeats are allowed by design.

use crate::log;

/// Built-in prompt ideas, used when no custom list is configured.
pub const BUILTIN_PROMPTS: &[&str] = &[
    "Ask Copilot to scaffold unit tests that describe the behavior you expect before refactoring.",
    "Use inline chat: 'Document this function with a docstring that highlights business rules.'",
    "Prompt Copilot to suggest accessibility improvements for the current page's HTML.",
    "Request a refactor: 'Simplify this endpoint and highlight risky changes in comments.'",
    "Experiment with pair-debugging: 'Why might this fetch handler fail on slow networks?'",
];

/// Short usage tips rotated through the footer.
pub const BUILTIN_TIPS: &[&str] = &[
    "Pair Copilot with clear, concise comments to steer code generation.",
    "Review AI-suggested code with the same scrutiny as human PRs.",
    "Use Copilot chat to iterate on tests before refactoring logic.",
];

/// An ordered, immutable, non-empty list of prompt strings.
///
/// Emptiness is unrepresentable: both constructors guarantee at least one
/// non-empty entry, so selection never has to handle the empty case.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptList {
    entries: Vec<String>,
}

impl PromptList {
    /// The built-in prompt list.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PROMPTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a list from user-supplied entries.
    ///
    /// Entries are trimmed and blank ones dropped. Returns `None` when
    /// nothing survives, leaving the fallback decision to the caller.
    pub fn from_entries(entries: Vec<String>) -> Option<Self> {
        let entries: Vec<String> = entries
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Uniform random index provider.
///
/// This is the seam between selection logic and the RNG: production code
/// uses [`FastrandSource`], tests substitute scripted indices.
pub trait IndexSource {
    /// Pick an index in `0..len`. Requires `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Production index source backed by fastrand.
#[derive(Debug)]
pub struct FastrandSource {
    rng: fastrand::Rng,
}

impl FastrandSource {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Seeded variant for reproducible draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastrandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for FastrandSource {
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "prompt list must be non-empty");
        self.rng.usize(..len)
    }
}

/// Picks prompts uniformly at random from a fixed list.
pub struct PromptPicker {
    list: PromptList,
    source: Box<dyn IndexSource>,
}

impl PromptPicker {
    /// Picker backed by the default RNG.
    pub fn new(list: PromptList) -> Self {
        Self::with_source(list, FastrandSource::new())
    }

    /// Picker with an explicit index source.
    pub fn with_source(list: PromptList, source: impl IndexSource + 'static) -> Self {
        Self {
            list,
            source: Box::new(source),
        }
    }

    /// Select one prompt uniformly at random.
    ///
    /// Each call is an independent draw over the whole list; the result is
    /// always an exact member of the list.
    pub fn pick(&mut self) -> &str {
        let index = self.source.pick_index(self.list.len());
        let text = &self.list.entries()[index];
        log::log_event(&format!("picked prompt {}/{}", index + 1, self.list.len()));
        text
    }

    pub fn list(&self) -> &PromptList {
        &self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Index source that always returns the same index.
    struct FixedSource(usize);

    impl IndexSource for FixedSource {
        fn pick_index(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn list_of(entries: &[&str]) -> PromptList {
        PromptList::from_entries(entries.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_builtin_list_is_non_empty() {
        let list = PromptList::builtin();
        assert_eq!(list.len(), BUILTIN_PROMPTS.len());
        assert!(list.entries().iter().all(|e| !e.is_empty()));
    }

    #[test]
    fn test_from_entries_drops_blank_lines() {
        let list = PromptList::from_entries(vec![
            "  keep me  ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "also keep".to_string(),
        ])
        .unwrap();

        assert_eq!(list.entries(), ["keep me", "also keep"]);
    }

    #[test]
    fn test_from_entries_rejects_all_blank() {
        assert!(PromptList::from_entries(vec!["".to_string(), "  ".to_string()]).is_none());
        assert!(PromptList::from_entries(vec![]).is_none());
    }

    #[test]
    fn test_pick_returns_list_member() {
        let list = PromptList::builtin();
        let mut picker = PromptPicker::with_source(list.clone(), FastrandSource::with_seed(7));

        for _ in 0..100 {
            let picked = picker.pick().to_string();
            assert!(list.entries().contains(&picked));
        }
    }

    #[test]
    fn test_pick_is_approximately_uniform() {
        let list = PromptList::builtin();
        let n = list.len();
        let mut picker = PromptPicker::with_source(list, FastrandSource::with_seed(42));

        let mut counts = vec![0usize; n];
        let draws = 10_000;
        for _ in 0..draws {
            let picked = picker.pick().to_string();
            let index = BUILTIN_PROMPTS.iter().position(|p| *p == picked).unwrap();
            counts[index] += 1;
        }

        // Expected 2000 per entry; allow a generous band around 1/5.
        let expected = draws / n;
        for count in counts {
            assert!(
                count > expected * 4 / 5 && count < expected * 6 / 5,
                "entry drawn {} times, expected around {}",
                count,
                expected
            );
        }
    }

    #[test]
    fn test_fixed_source_pins_selection() {
        let mut picker = PromptPicker::with_source(list_of(&["A", "B"]), FixedSource(0));
        assert_eq!(picker.pick(), "A");
    }

    #[test]
    fn test_immediate_repeats_are_allowed() {
        // No dedup guarantee: the same entry may come up twice in a row.
        let mut picker = PromptPicker::with_source(list_of(&["A", "B"]), FixedSource(1));
        let first = picker.pick().to_string();
        let second = picker.pick().to_string();
        assert_eq!(first, second);
    }
}
