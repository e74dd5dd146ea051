pub mod block_matcher;
pub mod matching_blocks;
pub mod token_match;
