//! Stack growth for recursion that follows source nesting.
//!
//! Nested `REP` blocks recurse in both the parser and the
//! interpreter. Wrapping each level in [`ensure_sufficient_stack`]
//! grows the stack on demand instead of overflowing on deeply
//! nested programs.

/// Grow the stack when less than this remains (100 KiB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1 MiB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below
/// the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
