/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Largest nesting limit a [`Config`] accepts.
///
/// Every nesting level costs several parser frames. At this limit the deepest
/// input still fits the 2 MiB stack of a spawned thread in unoptimized builds.
pub const MAX_ALLOWED_DEPTH: usize = 256;

/// Settings of a [`Calculator`](crate::Calculator).
///
/// # Example
/// ```
/// use safecalc::config::{Config, MAX_ALLOWED_DEPTH};
///
/// assert_eq!(Config::default().max_depth, 128);
/// assert_eq!(Config::default().with_max_depth(1_000_000).max_depth, MAX_ALLOWED_DEPTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting depth, shared by the parser and the evaluator.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Config {
    /// Returns a copy with the given nesting limit, clamped to
    /// `1..=MAX_ALLOWED_DEPTH`.
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        let max_depth = if max_depth == 0 {
            1
        } else if max_depth > MAX_ALLOWED_DEPTH {
            MAX_ALLOWED_DEPTH
        } else {
            max_depth
        };
        Self { max_depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_is_clamped_into_range() {
        assert_eq!(Config::default().with_max_depth(0).max_depth, 1);
        assert_eq!(Config::default().with_max_depth(64).max_depth, 64);
        assert_eq!(Config::default().with_max_depth(usize::MAX).max_depth,
                   MAX_ALLOWED_DEPTH);
    }
}
