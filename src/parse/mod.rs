pub mod split;
pub mod tokenize;

pub use split::split_compound_command;
pub use tokenize::{basename, command_words, is_assignment, tokenize};
