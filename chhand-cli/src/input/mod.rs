//! Input handling module

pub mod file_reader;
pub mod stdin_reader;

pub use file_reader::FileReader;
pub use stdin_reader::read_stdin;
