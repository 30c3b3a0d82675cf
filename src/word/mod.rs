//! Character classification and word-boundary detection
//!
//! Word movement is based on three character categories:
//! - **Whitespace**: space and tab, always, regardless of configuration
//! - **Separator**: characters from the configured separator set
//! - **Regular**: everything else
//!
//! A run of separators is its own word-like unit, so `foo->bar` has three
//! word stops: `foo`, `->`, `bar`. The same semantics apply to word
//! navigation and word-wise deletion.

use std::collections::HashMap;
use std::rc::Rc;

/// Character categories for word boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Everything that is neither whitespace nor a separator
    Regular,
    /// Space or tab
    Whitespace,
    /// A configured word separator
    Separator,
}

/// Kind of a matched word run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// Run of regular characters
    Regular,
    /// Run of separator characters
    Separator,
}

/// A word run on a single line
///
/// Offsets are 0-based character indices; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordMatch {
    /// First character of the run
    pub start: usize,
    /// One past the last character of the run
    pub end: usize,
    /// Whether the run is regular or separator characters
    pub kind: WordKind,
}

/// Classification table built from a separator-set string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordClassifier {
    ascii: [CharClass; 128],
    /// Non-ASCII separators, rare enough for a linear scan
    extra_separators: Vec<char>,
}

impl WordClassifier {
    /// Build a classifier for the given separator set
    ///
    /// Space and tab are always whitespace, even if present in `separators`.
    #[must_use]
    pub fn new(separators: &str) -> Self {
        let mut ascii = [CharClass::Regular; 128];
        ascii[b' ' as usize] = CharClass::Whitespace;
        ascii[b'\t' as usize] = CharClass::Whitespace;

        let mut extra_separators = Vec::new();
        for ch in separators.chars() {
            if ch == ' ' || ch == '\t' {
                continue;
            }
            if (ch as u32) < 128 {
                ascii[ch as usize] = CharClass::Separator;
            } else {
                extra_separators.push(ch);
            }
        }

        WordClassifier {
            ascii,
            extra_separators,
        }
    }

    /// Classify a single character
    #[must_use]
    pub fn classify(&self, ch: char) -> CharClass {
        if (ch as u32) < 128 {
            self.ascii[ch as usize]
        } else if self.extra_separators.contains(&ch) {
            CharClass::Separator
        } else {
            CharClass::Regular
        }
    }
}

/// Memoized classifiers keyed by separator-set string
///
/// Owned by whichever component owns language configuration; building the
/// table is cheap but happens on every keystroke otherwise.
#[derive(Debug, Default)]
pub struct ClassifierCache {
    map: HashMap<String, Rc<WordClassifier>>,
}

impl ClassifierCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the classifier for `separators`, building it on first use
    pub fn get(&mut self, separators: &str) -> Rc<WordClassifier> {
        if let Some(existing) = self.map.get(separators) {
            return Rc::clone(existing);
        }
        let built = Rc::new(WordClassifier::new(separators));
        self.map
            .insert(separators.to_string(), Rc::clone(&built));
        built
    }

    /// Number of distinct separator sets cached
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn kind_of(class: CharClass) -> WordKind {
    match class {
        CharClass::Separator => WordKind::Separator,
        _ => WordKind::Regular,
    }
}

/// Find the word run at or before `offset` on `line`
///
/// Scans leftward from `offset` (a 0-based character index). Whitespace
/// between the offset and the run is skipped. Returns `None` if only
/// whitespace lies before the offset.
#[must_use]
pub fn find_previous_word_on_line(
    classifier: &WordClassifier,
    line: &str,
    offset: usize,
) -> Option<WordMatch> {
    let chars: Vec<char> = line.chars().collect();
    let mut idx = offset.min(chars.len());

    // 1. Skip background whitespace
    while idx > 0 && classifier.classify(chars[idx - 1]) == CharClass::Whitespace {
        idx -= 1;
    }
    if idx == 0 {
        return None;
    }

    // 2. Latch the run type on the first non-whitespace character
    let run_class = classifier.classify(chars[idx - 1]);
    let end = idx;

    // 3. Extend left while the class holds
    while idx > 0 && classifier.classify(chars[idx - 1]) == run_class {
        idx -= 1;
    }

    Some(WordMatch {
        start: idx,
        end,
        kind: kind_of(run_class),
    })
}

/// Find the word run at or after `offset` on `line`
///
/// Scans rightward from `offset` (a 0-based character index). Whitespace
/// between the offset and the run is skipped. Returns `None` if only
/// whitespace lies after the offset.
#[must_use]
pub fn find_next_word_on_line(
    classifier: &WordClassifier,
    line: &str,
    offset: usize,
) -> Option<WordMatch> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut idx = offset.min(len);

    // 1. Skip background whitespace
    while idx < len && classifier.classify(chars[idx]) == CharClass::Whitespace {
        idx += 1;
    }
    if idx >= len {
        return None;
    }

    // 2. Latch the run type on the first non-whitespace character
    let run_class = classifier.classify(chars[idx]);
    let start = idx;

    // 3. Extend right while the class holds
    while idx < len && classifier.classify(chars[idx]) == run_class {
        idx += 1;
    }

    Some(WordMatch {
        start,
        end: idx,
        kind: kind_of(run_class),
    })
}

/// Find the complete word run touching `offset` on `line`
///
/// Prefers the character at `offset`, falling back to the one before it, so
/// a caret at either edge of a run still finds it. Returns `None` when both
/// neighbors are whitespace or out of range.
#[must_use]
pub fn find_word_at(
    classifier: &WordClassifier,
    line: &str,
    offset: usize,
) -> Option<WordMatch> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    let seed = if offset < len && classifier.classify(chars[offset]) != CharClass::Whitespace {
        offset
    } else if offset > 0
        && offset <= len
        && classifier.classify(chars[offset - 1]) != CharClass::Whitespace
    {
        offset - 1
    } else {
        return None;
    };

    let run_class = classifier.classify(chars[seed]);
    let mut start = seed;
    while start > 0 && classifier.classify(chars[start - 1]) == run_class {
        start -= 1;
    }
    let mut end = seed + 1;
    while end < len && classifier.classify(chars[end]) == run_class {
        end += 1;
    }

    Some(WordMatch {
        start,
        end,
        kind: kind_of(run_class),
    })
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
