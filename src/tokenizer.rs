pub mod html_tokenizer;
pub mod token;
