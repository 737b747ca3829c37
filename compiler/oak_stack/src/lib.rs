//! Host stack management for the recursive phases of the Oak pipeline.
//!
//! Both the parser (nested expressions, nested blocks) and the interpreter
//! (nested calls) recurse structurally over source input. A user program can
//! nest arbitrarily deep, so every recursive entry point runs through
//! [`ensure_sufficient_stack`], which allocates a fresh stack segment when the
//! current one is nearly exhausted.
//!
//! The interpreter bounds user-level recursion with its own call-depth limit;
//! this crate only guarantees that reaching that limit does not abort the
//! process first.
//!
//! On `wasm32` the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn shallow_nesting_returns_value() {
        assert_eq!(nest(16), 16);
    }

    #[test]
    fn deep_nesting_survives_small_default_stack() {
        // Far past what an 8MB main-thread stack holds without growth.
        assert_eq!(nest(200_000), 200_000);
    }

    #[test]
    fn propagates_errors_unchanged() {
        let outcome: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
        assert_eq!(outcome, Err("boom".to_string()));
    }
}
