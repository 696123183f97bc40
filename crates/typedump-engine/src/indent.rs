/// Width of one default indentation unit
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Produces the whitespace prefix for a nesting depth
pub trait IndentPolicy: Send + Sync {
    fn indent(&self, level: usize) -> String;
}

/// `level` repetitions of a fixed number of spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spaces {
    pub width: usize,
}

impl Spaces {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for Spaces {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

impl IndentPolicy for Spaces {
    fn indent(&self, level: usize) -> String {
        " ".repeat(self.width * level)
    }
}

impl<F> IndentPolicy for F
where
    F: Fn(usize) -> String + Send + Sync,
{
    fn indent(&self, level: usize) -> String {
        self(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indent_is_four_spaces_per_level() {
        let policy = Spaces::default();
        assert_eq!(policy.indent(0), "");
        assert_eq!(policy.indent(2), "        ");
    }

    #[test]
    fn test_closure_policy() {
        let tabs = |level: usize| "\t".repeat(level);
        assert_eq!(tabs.indent(3), "\t\t\t");
    }
}
