//! CLI command handlers.

mod completions;
mod compute;
mod input;
mod validate;

pub use completions::run_completions;
pub use compute::run_compute;
pub use validate::run_validate;

#[cfg(test)]
pub(crate) use validate::render;
