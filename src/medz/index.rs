//! Resolution of user-typed indices against the current list.
//!
//! Users address lookup results and episodes by the 1-based numbers
//! the listings print. [`resolve`] converts one of those tokens into a
//! 0-based position, rejecting anything non-numeric or outside
//! `1..=len`. The same contract serves both lists; only the backing
//! sequence differs.

use crate::error::{MedzError, Result};

pub fn resolve(input: &str, len: usize) -> Result<usize> {
    let n: i64 = input
        .trim()
        .parse()
        .map_err(|_| MedzError::InvalidIndex(input.trim().to_string()))?;
    if n < 1 || n as u64 > len as u64 {
        return Err(MedzError::IndexOutOfRange { given: n, max: len });
    }
    Ok((n - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_valid_range() {
        assert_eq!(resolve("1", 3).unwrap(), 0);
        assert_eq!(resolve("3", 3).unwrap(), 2);
        assert_eq!(resolve(" 2 ", 3).unwrap(), 1);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            resolve("0", 3),
            Err(MedzError::IndexOutOfRange { given: 0, max: 3 })
        ));
        assert!(matches!(
            resolve("4", 3),
            Err(MedzError::IndexOutOfRange { given: 4, max: 3 })
        ));
        assert!(matches!(
            resolve("-1", 3),
            Err(MedzError::IndexOutOfRange { given: -1, max: 3 })
        ));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(
            resolve("two", 3),
            Err(MedzError::InvalidIndex(_))
        ));
        assert!(matches!(resolve("", 3), Err(MedzError::InvalidIndex(_))));
        assert!(matches!(resolve("1.5", 3), Err(MedzError::InvalidIndex(_))));
    }

    #[test]
    fn empty_list_rejects_everything() {
        assert!(matches!(
            resolve("1", 0),
            Err(MedzError::IndexOutOfRange { given: 1, max: 0 })
        ));
    }
}
