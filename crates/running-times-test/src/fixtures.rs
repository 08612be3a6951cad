//! Fixed inputs.

/// Ten values with duplicates, in no particular order.
pub const FIXED_ARRAY: [i32; 10] = [42, 7, 99_999, 1, 512, 7, 100_000, 3, 88, 64];

/// [`FIXED_ARRAY`] in ascending order.
pub const SORTED_FIXED_ARRAY: [i32; 10] = [1, 3, 7, 7, 42, 64, 88, 512, 99_999, 100_000];
