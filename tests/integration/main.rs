mod error_handling;
mod file_loading;
