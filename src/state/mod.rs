/// State management module
///
/// This module handles all form state, including:
/// - Shared data structures and the wire payload (data.rs)
/// - Price and description validators (validation.rs)
/// - The form store and its submission phases (form.rs)

pub mod data;
pub mod form;
pub mod validation;
