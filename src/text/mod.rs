// Text processing — extraction by parsing mode and word tokenization.

pub mod extract;
pub mod mode;
pub mod tokenizer;

pub use extract::extract;
pub use mode::ParseMode;
pub use tokenizer::{parse_words, tokenize};
