pub mod console;
pub mod token_file;
