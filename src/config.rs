//! Front-end configuration.

/// Where the parser pulls its tokens from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    /// Lexer driven directly by the parser on the calling thread
    #[default]
    Inline,
    /// Lexer on its own thread, handing over one token at a time
    Threaded,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub lex_mode: LexMode,
    /// Name attached to log output, `"shell"` when unset
    pub source_name: Option<String>,
}

impl Config {
    pub fn new(lex_mode: LexMode, source_name: Option<String>) -> Self {
        Config {
            lex_mode,
            source_name,
        }
    }

    pub fn source_name(&self) -> &str {
        self.source_name.as_deref().unwrap_or("shell")
    }
}
