//! Application use-case trait

use crate::core::error::AppResult;
use async_trait::async_trait;

/// A single application operation taking `I` and producing `O`
///
/// Use cases sit between callers (controllers, CLIs, jobs) and repositories:
/// they turn raw input into repository calls and repository results into
/// transport-safe output.
#[async_trait]
pub trait UseCase<I, O>: Send + Sync
where
    I: Send + 'static,
{
    async fn execute(&self, input: I) -> AppResult<O>;
}
