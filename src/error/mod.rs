//! Top-level error type for the binary.

mod app;

pub use app::AppError;
