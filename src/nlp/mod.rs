//! Text processing: tokenization of corpus lines and free text

pub mod tokenizer;
