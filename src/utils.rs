pub mod char_class;
pub mod common_len;
