use std::path::Path;

use rayon::ThreadPoolBuilder;

/// Resolves a `--threads` spec ("auto", "-1", or a positive integer) to a
/// concrete worker count and installs a global rayon thread pool sized
/// to it.
pub fn configure_threads(spec: &str) -> usize {
    let count = if spec.eq_ignore_ascii_case("auto") || spec == "-1" {
        num_cpus::get()
    } else {
        spec.parse().unwrap_or_else(|_| num_cpus::get())
    };
    let _ = ThreadPoolBuilder::new().num_threads(count).build_global();
    count
}

/// Derives the default assignment/center output paths from the input
/// file name when the user didn't supply one explicitly.
pub fn default_output_path(input: &str, suffix: &str) -> String {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    format!("{stem}.{suffix}.csv")
}

/// `--lower`/`--upper` must be supplied together or not at all.
pub fn validate_bounds_pair(lower: Option<usize>, upper: Option<usize>) -> bool {
    lower.is_some() == upper.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolves_to_hardware_concurrency() {
        assert_eq!(configure_threads("auto"), num_cpus::get());
    }

    #[test]
    fn test_negative_one_resolves_to_hardware_concurrency() {
        assert_eq!(configure_threads("-1"), num_cpus::get());
    }

    #[test]
    fn test_numeric_spec_used_directly() {
        assert_eq!(configure_threads("3"), 3);
    }

    #[test]
    fn test_default_output_path_uses_stem() {
        assert_eq!(default_output_path("data/points.txt", "assignment"), "points.assignment.csv");
    }

    #[test]
    fn test_bounds_pair_rejects_one_sided() {
        assert!(!validate_bounds_pair(Some(1), None));
        assert!(!validate_bounds_pair(None, Some(1)));
    }

    #[test]
    fn test_bounds_pair_accepts_both_or_neither() {
        assert!(validate_bounds_pair(Some(1), Some(2)));
        assert!(validate_bounds_pair(None, None));
    }
}
