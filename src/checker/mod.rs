pub mod resume_format_checker;

pub use resume_format_checker::ResumeFormatChecker;
