/// Classification for retry policy.
///
/// # Behavior Summary
///
/// | Class | Retry same request? | Fall back? |
/// |-------|---------------------|------------|
/// | `Never` | No | Yes (placeholder / empty result) |
/// | `WithBackoff` | Yes, after a delay | After the retry fails |
/// | `NextProvider` | No | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - the symbol does not exist.
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Transient failure (rate limit, timeout). One delayed retry may succeed.
    WithBackoff,

    /// This source can't answer, but another one (or a placeholder) might.
    NextProvider,
}
