//! Admissible grid sizes for the FFT-based spectral solvers.
//!
//! The Poisson solver downstream factorises every direction with an FFT
//! that only supports interval counts of the form
//!
//! ```text
//! m = 2^(1+a) × 3^b × 5^c,    m ≥ 8
//! ```
//!
//! where `m = n` for a periodic coordinate and `m = n - 1` otherwise
//! (`n` being the number of points). The smallest admissible point counts
//! are therefore 8 (periodic) and 9 (non-periodic).
//!
//! Both admissible sequences are built once, on first use, and shared for
//! the lifetime of the process.

use std::sync::LazyLock;

use log::debug;

/// Minimum interval count required by the derivative stencils.
pub const MIN_INTERVALS: usize = 8;

/// Exclusive upper bound of the precomputed admissible sequences.
pub const TABLE_END: usize = 9002;

static PERIODIC: LazyLock<Vec<usize>> = LazyLock::new(|| build_table(true));
static NON_PERIODIC: LazyLock<Vec<usize>> = LazyLock::new(|| build_table(false));

fn build_table(periodic: bool) -> Vec<usize> {
    let table = admissible_in_range(periodic, 0, TABLE_END);
    debug!(
        "built admissible grid-size table (periodic = {periodic}): {} entries, {}..={}",
        table.len(),
        table.first().copied().unwrap_or_default(),
        table.last().copied().unwrap_or_default(),
    );
    table
}

/// Number of intervals spanned by `grid_size` points.
///
/// A periodic coordinate omits its last point (it coincides with the
/// first), so the interval count equals the point count. Returns `None`
/// for a non-periodic coordinate with no points.
#[inline]
pub fn interval_count(grid_size: usize, periodic: bool) -> Option<usize> {
    if periodic {
        Some(grid_size)
    } else {
        grid_size.checked_sub(1)
    }
}

/// Check whether `grid_size` points form an admissible grid.
///
/// # Example
///
/// ```
/// use compact_mesh::mesh::is_admissible;
///
/// assert!(is_admissible(17, false));
/// assert!(!is_admissible(16, false));
/// assert!(is_admissible(16, true));
/// ```
pub fn is_admissible(grid_size: usize, periodic: bool) -> bool {
    let Some(mut m) = interval_count(grid_size, periodic) else {
        return false;
    };

    if m < MIN_INTERVALS {
        return false;
    }

    // One factor of 2 is mandatory; odd counts never reduce to 1.
    if m % 2 == 0 {
        m /= 2;
        for factor in [2, 3, 5] {
            while m % factor == 0 {
                m /= factor;
            }
        }
    }

    m == 1
}

/// All admissible grid sizes in `[start, end)`, in increasing order.
pub fn admissible_in_range(periodic: bool, start: usize, end: usize) -> Vec<usize> {
    (start..end)
        .filter(|&n| is_admissible(n, periodic))
        .collect()
}

/// Precomputed admissible grid sizes below [`TABLE_END`].
///
/// ```text
/// periodic:     [8, 10, 12, 16, 18, 20, 24, ..., 8640, 8748, 9000]
/// non-periodic: [9, 11, 13, 17, 19, 21, 25, ..., 8641, 8749, 9001]
/// ```
pub fn possible_grid_sizes(periodic: bool) -> &'static [usize] {
    if periodic {
        PERIODIC.as_slice()
    } else {
        NON_PERIODIC.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_boundary_values() {
        for n in [8, 10, 12, 16, 18, 20, 24] {
            assert!(is_admissible(n, true), "{n} should be admissible");
        }
        for n in [0, 2, 4, 6, 7, 9, 11, 13, 14, 22] {
            assert!(!is_admissible(n, true), "{n} should not be admissible");
        }
    }

    #[test]
    fn test_non_periodic_boundary_values() {
        assert!(!is_admissible(0, false));
        assert!(!is_admissible(8, false));
        assert!(is_admissible(9, false));
        assert!(!is_admissible(16, false));
        assert!(is_admissible(17, false));
        assert!(is_admissible(65, false));
        assert!(is_admissible(129, false));
    }

    #[test]
    fn test_odd_interval_counts_rejected() {
        // 9, 15, 25, 27 factor into {3, 5} but lack the leading 2
        for m in [9, 15, 25, 27, 45, 75] {
            assert!(!is_admissible(m, true));
            assert!(!is_admissible(m + 1, false));
        }
    }

    #[test]
    fn test_other_primes_rejected() {
        for m in [14, 22, 26, 28, 34, 38, 42] {
            assert!(!is_admissible(m, true), "{m} has a prime factor > 5");
        }
    }

    #[test]
    fn test_table_endpoints() {
        let periodic = possible_grid_sizes(true);
        let non_periodic = possible_grid_sizes(false);

        assert_eq!(&periodic[..7], &[8, 10, 12, 16, 18, 20, 24]);
        assert_eq!(&non_periodic[..7], &[9, 11, 13, 17, 19, 21, 25]);
        assert_eq!(&periodic[periodic.len() - 3..], &[8640, 8748, 9000]);
        assert_eq!(&non_periodic[non_periodic.len() - 3..], &[8641, 8749, 9001]);
    }

    #[test]
    fn test_tables_are_offset_by_one() {
        let periodic = possible_grid_sizes(true);
        let non_periodic = possible_grid_sizes(false);

        assert_eq!(periodic.len(), non_periodic.len());
        for (p, np) in periodic.iter().zip(non_periodic) {
            assert_eq!(p + 1, *np);
        }
    }

    #[test]
    fn test_table_matches_predicate() {
        let periodic = possible_grid_sizes(true);
        for window in periodic.windows(2) {
            assert!(window[0] < window[1]);
            for n in window[0] + 1..window[1] {
                assert!(!is_admissible(n, true));
            }
        }
        assert!(periodic.iter().all(|&n| is_admissible(n, true)));
    }

    #[test]
    fn test_admissible_in_range_respects_bounds() {
        assert_eq!(admissible_in_range(true, 10, 20), vec![10, 12, 16, 18]);
        assert!(admissible_in_range(false, 0, 9).is_empty());
    }

    #[test]
    fn test_interval_count() {
        assert_eq!(interval_count(16, true), Some(16));
        assert_eq!(interval_count(17, false), Some(16));
        assert_eq!(interval_count(0, false), None);
    }
}
