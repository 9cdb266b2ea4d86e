//! Maps UI service errors to shadow_core::AppError for consistent user-facing messages.

mod weather;
