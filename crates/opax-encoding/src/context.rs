//! Encoding context threaded through every encode and decode call.
//!
//! The context carries the resource limits enforced while reading untrusted
//! input, the remaining extension nesting budget, and an optional reference
//! to the [`TypeRegistry`] used to resolve extension bodies by their binary
//! encoding id.

use crate::error::{EncodingError, Result};
use crate::registry::TypeRegistry;

/// Default maximum number of elements in a decoded array.
pub const DEFAULT_MAX_ARRAY_LENGTH: usize = 65_536;

/// Default maximum byte length of a decoded string.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 16 * 1024 * 1024;

/// Default maximum byte length of a decoded byte string.
pub const DEFAULT_MAX_BYTE_STRING_LENGTH: usize = 16 * 1024 * 1024;

/// Default maximum nesting depth for extension bodies.
pub const DEFAULT_MAX_NESTING_DEPTH: u32 = 32;

/// Resource limits applied while encoding and decoding.
///
/// The limits bound what a hostile peer can make the decoder allocate.
/// They are enforced symmetrically on encode so that a value this stack
/// produces is always decodable under the same limits.
#[derive(Debug, Clone, Copy)]
pub struct EncodingLimits {
    /// Maximum number of elements in an array.
    pub max_array_length: usize,
    /// Maximum byte length of a string.
    pub max_string_length: usize,
    /// Maximum byte length of a byte string.
    pub max_byte_string_length: usize,
    /// Maximum nesting depth for extension bodies.
    pub max_nesting_depth: u32,
}

impl Default for EncodingLimits {
    fn default() -> Self {
        Self {
            max_array_length: DEFAULT_MAX_ARRAY_LENGTH,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            max_byte_string_length: DEFAULT_MAX_BYTE_STRING_LENGTH,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Context for a single encode or decode pass.
///
/// Contexts are cheap to copy. [`EncodingContext::descend`] returns a child
/// context with one less unit of nesting budget; the parent is unchanged, so
/// sibling extension bodies each get the full remaining budget.
#[derive(Debug, Clone, Copy)]
pub struct EncodingContext {
    limits: EncodingLimits,
    registry: Option<&'static TypeRegistry>,
    remaining_depth: u32,
}

impl EncodingContext {
    /// Create a context with default limits and no registry.
    ///
    /// Without a registry, extension bodies decode as opaque bytes.
    pub fn new() -> Self {
        Self::with_limits(EncodingLimits::default())
    }

    /// Create a context with explicit limits and no registry.
    pub fn with_limits(limits: EncodingLimits) -> Self {
        Self {
            limits,
            registry: None,
            remaining_depth: limits.max_nesting_depth,
        }
    }

    /// Attach a registry used to resolve extension bodies while decoding.
    pub fn with_registry(mut self, registry: &'static TypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// The limits this context enforces.
    pub fn limits(&self) -> &EncodingLimits {
        &self.limits
    }

    /// The registry used for extension dispatch, if any.
    pub fn registry(&self) -> Option<&'static TypeRegistry> {
        self.registry
    }

    /// Consume one unit of nesting budget and return the child context.
    ///
    /// Fails with [`EncodingError::DepthLimitExceeded`] once the budget is
    /// exhausted, which bounds recursion on crafted deeply-nested input.
    pub fn descend(&self) -> Result<Self> {
        match self.remaining_depth.checked_sub(1) {
            Some(remaining) => Ok(Self {
                remaining_depth: remaining,
                ..*self
            }),
            None => Err(EncodingError::DepthLimitExceeded {
                limit: self.limits.max_nesting_depth,
            }),
        }
    }
}

impl Default for EncodingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let ctx = EncodingContext::new();
        assert_eq!(ctx.limits().max_array_length, DEFAULT_MAX_ARRAY_LENGTH);
        assert_eq!(ctx.limits().max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
        assert!(ctx.registry().is_none());
    }

    #[test]
    fn descend_consumes_budget() {
        let limits = EncodingLimits {
            max_nesting_depth: 2,
            ..EncodingLimits::default()
        };
        let ctx = EncodingContext::with_limits(limits);
        let child = ctx.descend().unwrap();
        let grandchild = child.descend().unwrap();
        assert!(matches!(
            grandchild.descend(),
            Err(EncodingError::DepthLimitExceeded { limit: 2 })
        ));
    }

    #[test]
    fn descend_leaves_parent_untouched() {
        let limits = EncodingLimits {
            max_nesting_depth: 1,
            ..EncodingLimits::default()
        };
        let ctx = EncodingContext::with_limits(limits);
        ctx.descend().unwrap();
        // The budget is not shared between siblings.
        assert!(ctx.descend().is_ok());
    }
}
