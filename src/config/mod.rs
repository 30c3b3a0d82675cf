//! Cursor and per-language configuration
//!
//! Plain value types consumed by the movement engine and edit planner.
//! The host owns these; the core never reads configuration from globals.

/// Word separators used when no explicit configuration is given
pub const DEFAULT_WORD_SEPARATORS: &str = "`~!@#$%^&*()-=+[{]}\\|;:'\",.<>/?";

/// A configured character pair (auto-close or surround)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterPair {
    /// Opening character
    pub open: char,
    /// Closing character
    pub close: char,
}

impl CharacterPair {
    /// Create a pair
    #[must_use]
    pub fn new(open: char, close: char) -> Self {
        CharacterPair { open, close }
    }
}

/// Per-language editing tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Characters that trigger a re-indentation pass after insertion
    pub electric_chars: Vec<char>,
    /// Pairs completed automatically when the opener is typed
    pub auto_closing_pairs: Vec<CharacterPair>,
    /// Pairs that wrap a non-empty selection when typed
    pub surrounding_pairs: Vec<CharacterPair>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        let pairs = vec![
            CharacterPair::new('(', ')'),
            CharacterPair::new('[', ']'),
            CharacterPair::new('{', '}'),
            CharacterPair::new('"', '"'),
            CharacterPair::new('\'', '\''),
        ];
        LanguageConfig {
            electric_chars: Vec::new(),
            auto_closing_pairs: pairs.clone(),
            surrounding_pairs: pairs,
        }
    }
}

impl LanguageConfig {
    /// Look up the auto-closing pair opened by `ch`
    #[must_use]
    pub fn auto_closing_pair_for_open(&self, ch: char) -> Option<CharacterPair> {
        self.auto_closing_pairs.iter().copied().find(|p| p.open == ch)
    }

    /// Whether `ch` closes any configured auto-closing pair
    #[must_use]
    pub fn is_auto_closing_close(&self, ch: char) -> bool {
        self.auto_closing_pairs.iter().any(|p| p.close == ch)
    }

    /// Look up the surround pair opened by `ch`
    #[must_use]
    pub fn surrounding_pair_for(&self, ch: char) -> Option<CharacterPair> {
        self.surrounding_pairs.iter().copied().find(|p| p.open == ch)
    }

    /// Whether `ch` is in the electric set
    #[must_use]
    pub fn is_electric(&self, ch: char) -> bool {
        self.electric_chars.contains(&ch)
    }
}

/// Configuration consumed by the cursor core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorConfig {
    /// Columns per tab stop (clamped to at least 1)
    pub tab_size: usize,
    /// Insert spaces instead of hard tabs
    pub insert_spaces: bool,
    /// Characters classified as word separators
    pub word_separators: String,
    /// Lines moved by one page step
    pub page_size: usize,
    /// Master toggle for auto-closing pair insertion
    pub auto_closing_brackets: bool,
    /// Cut/copy with an empty selection operate on the whole line
    pub empty_selection_clipboard: bool,
    /// Per-language editing tables
    pub language: LanguageConfig,
}

impl Default for CursorConfig {
    fn default() -> Self {
        CursorConfig {
            tab_size: 4,
            insert_spaces: true,
            word_separators: DEFAULT_WORD_SEPARATORS.to_string(),
            page_size: 20,
            auto_closing_brackets: true,
            empty_selection_clipboard: true,
            language: LanguageConfig::default(),
        }
    }
}

impl CursorConfig {
    /// Tab size with the >= 1 clamp applied
    #[must_use]
    pub fn tab_size(&self) -> usize {
        self.tab_size.max(1)
    }

    /// The canonical one-level indent string (`\t` or `tab_size` spaces)
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size())
        } else {
            "\t".to_string()
        }
    }

    /// Page size with the >= 1 clamp applied
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
