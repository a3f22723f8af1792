pub mod check_error;

pub use check_error::CheckError;

pub type Result<T> = std::result::Result<T, CheckError>;
