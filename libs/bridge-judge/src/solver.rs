/// Reference Solver - Trusted Two Sum Oracle
///
/// **Core Responsibility:**
/// Parse a test-case input and derive the correct answer independently of
/// whatever the submission contains.
///
/// **Input Format (bit-exact with the challenge fixtures):**
/// - Line 1: bracketed, comma-separated integers, e.g. `[2,7,11,15]`
/// - Line 2: a single integer target, e.g. `9`
///
/// **Answer Format:**
/// - `"[i,j]"` with `i < j`, the first pair found in scan order
/// - `"[]"` when no pair sums to the target

use crate::error::EvaluationError;
use std::collections::HashMap;

/// Split a test input into the number sequence and the target
pub fn parse_test_input(input: &str) -> Result<(Vec<i64>, i64), EvaluationError> {
    // One trailing line terminator is tolerated; anything else must be exactly two lines
    let body = input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input);
    let lines: Vec<&str> = body.split('\n').collect();

    let (array_line, target_line) = match lines.as_slice() {
        [array_line, target_line] => (*array_line, *target_line),
        _ => {
            return Err(EvaluationError::InputParse(format!(
                "expected 2 lines (array and target), found {}",
                lines.len()
            )))
        }
    };

    let nums = parse_sequence(array_line)?;
    let target = parse_integer(target_line).map_err(|_| {
        EvaluationError::InputParse(format!("invalid target '{}'", target_line.trim()))
    })?;

    Ok((nums, target))
}

fn parse_sequence(line: &str) -> Result<Vec<i64>, EvaluationError> {
    let cleaned: String = line.chars().filter(|c| *c != '[' && *c != ']').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    cleaned
        .split(',')
        .map(|token| {
            parse_integer(token).map_err(|_| {
                EvaluationError::InputParse(format!("invalid integer '{}' in array", token.trim()))
            })
        })
        .collect()
}

fn parse_integer(token: &str) -> Result<i64, std::num::ParseIntError> {
    token.trim().parse::<i64>()
}

/// Indices of the first pair summing to `target`, earlier index first
///
/// Single left-to-right scan remembering the first index of every value
/// seen so far.
pub fn find_pair(nums: &[i64], target: i64) -> Result<Option<(usize, usize)>, EvaluationError> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &value) in nums.iter().enumerate() {
        let complement = target.checked_sub(value).ok_or_else(|| {
            EvaluationError::Execution("integer overflow computing complement".to_string())
        })?;

        if let Some(&j) = seen.get(&complement) {
            return Ok(Some((j, i)));
        }
        seen.entry(value).or_insert(i);
    }

    Ok(None)
}

/// Answer string for `(nums, target)`: `"[i,j]"` or `"[]"`
pub fn solve(nums: &[i64], target: i64) -> Result<String, EvaluationError> {
    Ok(match find_pair(nums, target)? {
        Some((i, j)) => format!("[{},{}]", i, j),
        None => "[]".to_string(),
    })
}

/// Parse a raw test input and solve it
pub fn solve_input(input: &str) -> Result<String, EvaluationError> {
    let (nums, target) = parse_test_input(input)?;
    solve(&nums, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_answers() {
        assert_eq!(solve(&[2, 7, 11, 15], 9).unwrap(), "[0,1]");
        assert_eq!(solve(&[3, 2, 4], 6).unwrap(), "[1,2]");
        assert_eq!(solve(&[3, 3], 6).unwrap(), "[0,1]");
        assert_eq!(solve(&[1, 2], 100).unwrap(), "[]");
    }

    #[test]
    fn test_empty_and_single_element() {
        assert_eq!(solve(&[], 0).unwrap(), "[]");
        assert_eq!(solve(&[5], 10).unwrap(), "[]");
    }

    #[test]
    fn test_first_match_wins() {
        // (0,3) and (1,2) both sum to 5; the scan completes (1,2) first
        assert_eq!(find_pair(&[1, 2, 3, 4], 5).unwrap(), Some((1, 2)));
        // duplicate values keep their first index
        assert_eq!(find_pair(&[2, 2, 2], 4).unwrap(), Some((0, 1)));
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(solve(&[-3, 4, 3, 90], 0).unwrap(), "[0,2]");
        assert_eq!(solve(&[-1, -2, -3, -4, -5], -8).unwrap(), "[2,4]");
    }

    #[test]
    fn test_overflow_is_an_execution_error() {
        let err = find_pair(&[-1, 5], i64::MAX).unwrap_err();
        assert!(matches!(err, EvaluationError::Execution(_)));
        // the message must not echo test data
        assert!(!err.to_string().contains(&i64::MAX.to_string()));
        assert!(!err.to_string().contains("-1"));
    }

    #[test]
    fn test_parse_standard_input() {
        let (nums, target) = parse_test_input("[2,7,11,15]\n9").unwrap();
        assert_eq!(nums, vec![2, 7, 11, 15]);
        assert_eq!(target, 9);
    }

    #[test]
    fn test_parse_tolerates_spacing_and_line_endings() {
        let (nums, target) = parse_test_input("[ 3, 2 , 4 ]\r\n 6 \n").unwrap();
        assert_eq!(nums, vec![3, 2, 4]);
        assert_eq!(target, 6);
    }

    #[test]
    fn test_parse_empty_array() {
        let (nums, target) = parse_test_input("[]\n3").unwrap();
        assert!(nums.is_empty());
        assert_eq!(target, 3);
    }

    #[test]
    fn test_parse_rejects_missing_target() {
        let err = parse_test_input("[2,7,11,15]").unwrap_err();
        assert_eq!(
            err,
            EvaluationError::InputParse("expected 2 lines (array and target), found 1".into())
        );
    }

    #[test]
    fn test_parse_rejects_extra_lines() {
        assert!(parse_test_input("[1,2]\n3\n4").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        let err = parse_test_input("[1,x,3]\n4").unwrap_err();
        assert_eq!(err, EvaluationError::InputParse("invalid integer 'x' in array".into()));

        let err = parse_test_input("[1,2]\nnine").unwrap_err();
        assert_eq!(err, EvaluationError::InputParse("invalid target 'nine'".into()));

        assert!(parse_test_input("[1,,2]\n3").is_err());
    }

    #[test]
    fn test_solve_input() {
        assert_eq!(solve_input("[2,7,11,15]\n9").unwrap(), "[0,1]");
        assert!(solve_input("garbage").is_err());
    }
}
