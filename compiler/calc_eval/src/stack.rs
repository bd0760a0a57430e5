//! Stack growth for nested groups.
//!
//! The coordinator recurses once per `(`, so `((((1))))` costs stack in
//! proportion to how deeply the user nested it. Every group evaluation is
//! entered through [`ensure_sufficient_stack`].

/// Headroom below which a fresh segment is allocated before entering a group.
#[cfg(not(target_arch = "wasm32"))]
const GROUP_HEADROOM: usize = 128 * 1024;

/// Size of each freshly allocated segment.
#[cfg(not(target_arch = "wasm32"))]
const GROUP_SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the group headroom remains.
///
/// On wasm the engine's own stack limit applies and `f` runs directly.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(not(target_arch = "wasm32"))]
    {
        stacker::maybe_grow(GROUP_HEADROOM, GROUP_SEGMENT, f)
    }
    #[cfg(target_arch = "wasm32")]
    {
        f()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn nest(depth: u32) -> u32 {
        if depth == 0 {
            return 0;
        }
        ensure_sufficient_stack(|| nest(depth - 1) + 1)
    }

    #[test]
    fn test_recursion_beyond_main_thread_stack() {
        assert_eq!(nest(200_000), 200_000);
    }

    #[test]
    fn test_passes_result_through() {
        assert_eq!(ensure_sufficient_stack(|| "group"), "group");
    }
}
