/// Adds up every number in the slice. An empty slice sums to zero.
///
/// Overflow wraps around in every build profile.
pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0, |acc, n| acc.wrapping_add(*n))
}
