pub mod assign;
pub mod binary;
