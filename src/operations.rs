pub mod action;
pub mod operation;
