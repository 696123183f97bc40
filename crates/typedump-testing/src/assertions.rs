//! Custom assertions on rendered dump text.
//!
//! Provides checks that are awkward to express with plain string equality:
//! - Arrow column alignment within one container
//! - Indentation of every line

use anyhow::{Result, bail};

const ARROW: &str = " => ";

/// Column of ` => ` for every entry line whose indentation is exactly
/// `indent_len` characters.
pub fn arrow_columns(output: &str, indent_len: usize) -> Vec<usize> {
    output
        .lines()
        .filter(|line| leading_spaces(line) == indent_len)
        .filter(|line| line.trim_start().starts_with('['))
        .filter_map(|line| line.find(ARROW).map(|col| line[..col].chars().count()))
        .collect()
}

/// Assert that all entries at `indent_len` put their arrow in the same column.
pub fn assert_arrows_aligned(output: &str, indent_len: usize) -> Result<usize> {
    let columns = arrow_columns(output, indent_len);
    let Some(&first) = columns.first() else {
        bail!("No entries found at indentation {}:\n{}", indent_len, output);
    };

    if let Some(col) = columns.iter().find(|&&col| col != first) {
        bail!(
            "Arrow columns differ at indentation {} ({} vs {}):\n{}",
            indent_len,
            first,
            col,
            output
        );
    }

    Ok(first)
}

/// Assert that every non-empty line starts with at least `indent_len` spaces.
pub fn assert_min_indent(output: &str, indent_len: usize) -> Result<()> {
    for (i, line) in output.lines().enumerate() {
        if !line.is_empty() && leading_spaces(line) < indent_len {
            bail!(
                "Line {} is indented by {} (< {}): {:?}",
                i,
                leading_spaces(line),
                indent_len,
                line
            );
        }
    }
    Ok(())
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_columns() {
        let output = "MAPPING [\n    ['a']  => 1,\n    ['bb'] => 2\n]\n";
        assert_eq!(assert_arrows_aligned(output, 4).unwrap(), 10);
    }

    #[test]
    fn test_misaligned_columns_fail() {
        let output = "MAPPING [\n    ['a'] => 1,\n    ['bb'] => 2\n]\n";
        assert!(assert_arrows_aligned(output, 4).is_err());
    }
}
