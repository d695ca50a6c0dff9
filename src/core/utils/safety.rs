//! Zero-Cost Safety Macros
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use waterworks_engine::fast;
//!
//! let idx = 2;
//!
//! let arr = vec![1u32, 2, 3, 4, 5];
//! // Read: fast!(slice, [index])
//! let val = *fast!(arr, [idx]);
//! assert_eq!(val, 3);
//!
//! let mut kinds = vec![0u8; 5];
//! // Write: fast!(slice, [index] = value)
//! fast!(kinds, [idx] = 1);
//! assert_eq!(kinds[idx], 1);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
