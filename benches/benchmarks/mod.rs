pub mod parsing;
pub mod selection;
