pub mod analyzer;
pub mod dictionary;
pub mod guesser;
pub mod loader;
pub mod paradigm;
pub mod parse;
pub mod tag;

pub use analyzer::UkrainianAnalyzer;
pub use dictionary::{Lexeme, Lexicon, LexiconDocument};
pub use guesser::SuffixGuesser;
pub use loader::{LexiconLoader, LoadError};
pub use paradigm::{Paradigm, ParadigmForm};
pub use parse::UkrainianParse;
pub use tag::Tag;
