use crate::utils::error::{HelloError, Result};
use std::fmt::Debug;
use std::ops::Add;

/// Native `+` for `T`; integer overflow behaves as Rust's `+` does for the build profile.
pub fn add_numbers<T>(a: T, b: T) -> T
where
    T: Add<Output = T> + Copy + Debug,
{
    let sum = a + b;
    tracing::debug!("Computed {:?} + {:?} = {:?}", a, b, sum);
    sum
}

/// `add_numbers` for configured addends, reporting overflow instead of panicking.
pub fn checked_add_numbers(a: i64, b: i64) -> Result<i64> {
    if a.checked_add(b).is_none() {
        return Err(HelloError::Overflow { a, b });
    }
    Ok(add_numbers(a, b))
}
