//! Per-word reading annotation visibility.
//!
//! A single global preference plus a set of words whose visibility is flipped
//! relative to it. With the preference on, listed words hide their reading;
//! with it off, listed words show theirs.

use std::collections::HashSet;

/// `global XOR overrides.contains(word)`
pub fn should_show(word: &str, global: bool, overrides: &HashSet<String>) -> bool {
    global ^ overrides.contains(word)
}

/// Flip membership of `word`. Returns whether the word is now overridden.
pub fn toggle(word: &str, overrides: &mut HashSet<String>) -> bool {
    if overrides.remove(word) {
        false
    } else {
        overrides.insert(word.to_string());
        true
    }
}

/// Furigana visibility for one reading session
#[derive(Debug, Clone)]
pub struct FuriganaState {
    global: bool,
    overrides: HashSet<String>,
}

impl FuriganaState {
    pub fn new(global: bool) -> Self {
        Self {
            global,
            overrides: HashSet::new(),
        }
    }

    pub fn global(&self) -> bool {
        self.global
    }

    /// Change the default. Existing overrides stay flipped relative to it.
    pub fn set_global(&mut self, global: bool) {
        self.global = global;
    }

    pub fn should_show(&self, word: &str) -> bool {
        should_show(word, self.global, &self.overrides)
    }

    pub fn is_overridden(&self, word: &str) -> bool {
        self.overrides.contains(word)
    }

    pub fn toggle(&mut self, word: &str) -> bool {
        toggle(word, &mut self.overrides)
    }

    pub fn overrides(&self) -> &HashSet<String> {
        &self.overrides
    }
}

impl Default for FuriganaState {
    // Readings shown unless the user turns them off
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_truth_table() {
        let empty = HashSet::new();
        let with_word: HashSet<String> = ["日本".to_string()].into_iter().collect();

        assert!(should_show("日本", true, &empty));
        assert!(!should_show("日本", true, &with_word));
        assert!(should_show("日本", false, &with_word));
        assert!(!should_show("日本", false, &empty));
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut overrides = HashSet::new();
        assert!(toggle("本", &mut overrides));
        assert!(overrides.contains("本"));
        assert!(!toggle("本", &mut overrides));
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_state_keeps_overrides_across_global_change() {
        let mut state = FuriganaState::default();
        assert!(state.should_show("先生"));

        state.toggle("先生");
        assert!(!state.should_show("先生"));
        assert!(state.should_show("学生"));

        state.set_global(false);
        assert!(state.should_show("先生"));
        assert!(!state.should_show("学生"));
        assert!(state.is_overridden("先生"));
    }
}
