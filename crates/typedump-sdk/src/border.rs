/// Space between the frame and the widest line, both sides combined
const MARGIN: usize = 4;

/// Frame a multi-line block in a box, optionally titled.
///
/// The text is treated as opaque: it is split on `\n` and padded, nothing
/// else. An empty row is added above the first line.
///
/// ```
/// let framed = typedump_sdk::add_border("42", "main.rs:3");
/// assert!(framed.starts_with("\n+- main.rs:3 -+\n"));
/// assert!(framed.contains("\n|  42         |\n"));
/// assert!(framed.ends_with("+-------------+\n\n"));
/// ```
pub fn add_border(text: &str, title: &str) -> String {
    let title = title.trim();
    let lines: Vec<&str> = std::iter::once("").chain(text.split('\n')).collect();

    let widest = lines.iter().map(|line| width_of(line)).max().unwrap_or(0);
    let width = widest.max(width_of(title)) + MARGIN;

    let mut output = String::from("\n");
    if title.is_empty() {
        output.push('\n');
        output.push_str(&rule(width));
    } else {
        output.push('+');
        output.push_str(&pad_both(&format!(" {} ", title), width, '-'));
        output.push_str("+\n");
    }

    for line in &lines {
        output.push_str("|  ");
        output.push_str(&pad_right(line, width - MARGIN));
        output.push_str("  |\n");
    }

    output.push_str(&rule(width));
    output.push('\n');
    output
}

fn rule(width: usize) -> String {
    format!("+{}+\n", "-".repeat(width))
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn pad_right(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Center `text`, giving the left side the smaller half of an odd padding.
fn pad_both(text: &str, width: usize, fill: char) -> String {
    let total = width.saturating_sub(width_of(text));
    let left = total / 2;
    let right = total - left;
    let fill = fill.to_string();
    format!("{}{}{}", fill.repeat(left), text, fill.repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_border() {
        let framed = add_border("ab", "");
        assert_eq!(
            framed,
            "\n\n+------+\n|      |\n|  ab  |\n+------+\n\n"
        );
    }

    #[test]
    fn test_title_wider_than_body() {
        let framed = add_border("x", "title");
        let lines: Vec<&str> = framed.lines().collect();
        assert_eq!(lines[1], "+- title -+");
        assert_eq!(lines[2], format!("|{}|", " ".repeat(9)));
        assert_eq!(lines[3], format!("|  x{}|", " ".repeat(6)));
        assert_eq!(lines[4], format!("+{}+", "-".repeat(9)));
    }

    #[test]
    fn test_rows_share_width() {
        let framed = add_border("short\nmuch longer line\n", "t");
        let widths: Vec<usize> = framed
            .lines()
            .filter(|line| line.starts_with('|'))
            .map(|line| line.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(widths.len(), 4);
    }

    #[test]
    fn test_pad_both_puts_extra_on_right() {
        assert_eq!(pad_both("ab", 5, '-'), "-ab--");
    }
}
