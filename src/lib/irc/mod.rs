pub mod args;
pub mod launcher;
