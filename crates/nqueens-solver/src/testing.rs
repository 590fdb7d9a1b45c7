//! Shared fixtures for solver tests.

/// Number of distinct solutions for sizes 1 through 12 (OEIS A000170).
pub(crate) const KNOWN_COUNTS: [(usize, u64); 12] = [
    (1, 1),
    (2, 0),
    (3, 0),
    (4, 2),
    (5, 10),
    (6, 4),
    (7, 40),
    (8, 92),
    (9, 352),
    (10, 724),
    (11, 2680),
    (12, 14200),
];

/// A thread stack no OS will map, used to make thread creation fail.
pub(crate) const UNSPAWNABLE_STACK_SIZE: usize = usize::MAX / 4;

/// Asserts that no two queens share a row or a diagonal.
#[track_caller]
pub(crate) fn assert_non_attacking(placements: &[usize]) {
    for (c1, &r1) in placements.iter().enumerate() {
        for (c2, &r2) in placements.iter().enumerate().skip(c1 + 1) {
            assert_ne!(r1, r2, "columns {c1} and {c2} share row {r1}");
            assert_ne!(
                r1.abs_diff(r2),
                c2 - c1,
                "columns {c1} and {c2} share a diagonal in {placements:?}"
            );
        }
    }
}
