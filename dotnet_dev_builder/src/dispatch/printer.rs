use terminal_size::{terminal_size, Width};

use crate::dispatch::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug)]
pub(crate) struct PaddingWidth(pub usize);

#[derive(Debug)]
pub(crate) struct LeftWidth(pub usize);

#[derive(Debug)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    pub(crate) fn new(width: usize) -> Self {
        // A split word needs one column for its text and one for the '-'.
        MiddleWidth(std::cmp::max(width, 2))
    }
}

#[derive(Debug)]
pub(crate) struct TotalWidth(pub usize);

/// Lays out the usage listing: a padded command column next to a wrapped summary column.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: PaddingWidth,
    left: LeftWidth,
    middle: MiddleWidth,
}

// Leaves a margin at the right edge of the terminal.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Summaries are never squeezed below this, even when the terminal is narrower.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

impl ColumnRenderer {
    /// Size the summary column to fit `total_width`.
    /// The widest summary is used when it fits within the margin, otherwise the summaries take whatever the command column leaves.
    pub(crate) fn guided(
        padding: PaddingWidth,
        left: LeftWidth,
        middle: MiddleWidth,
        total_width: TotalWidth,
    ) -> Self {
        let TotalWidth(total) = total_width;
        let command_width = left.0 + padding.0;
        let margin_width = (total as f64 * TARGET_TOTAL_FACTOR) as usize;
        let widest_summary = std::cmp::max(middle.0, MINIMUM_MIDDLE_WIDTH);

        let summary_width = match total.checked_sub(command_width) {
            _ if widest_summary + command_width <= margin_width => widest_summary,
            Some(remaining) if remaining > 0 => std::cmp::max(remaining, MINIMUM_MIDDLE_WIDTH),
            _ => MINIMUM_MIDDLE_WIDTH,
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Usage commands take {command_width} of {total} columns, summaries take {summary_width}.");
        }

        Self {
            padding,
            left,
            middle: MiddleWidth::new(summary_width),
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str) -> Vec<String> {
        let padding = format!("{:width$}", "", width = self.padding.0);
        let left_column_width = self.left.0;
        let middle_column_width = std::cmp::max(self.middle.0.saturating_sub(indent), 2);
        let mut out = Vec::default();

        for (i, part) in wrap(middle, middle_column_width).iter().enumerate() {
            let left = if i == 0 { left } else { "" };
            out.push(format!(
                "{:indent$}{:left_column_width$}{padding}{}",
                "", left, part
            ));
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{}", "", left));
        }

        out
    }
}

fn wrap(summary: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in summary.split(' ').filter(|word| !word.is_empty()) {
        if !current.is_empty() && current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        let rest = split_word(word, width, &mut lines);
        current.push_str(rest);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Words wider than the column are cut into hyphenated pieces; the tail is returned to continue the line.
fn split_word<'a>(word: &'a str, width: usize, lines: &mut Vec<String>) -> &'a str {
    let step = width - 1;
    let mut rest = word;

    while rest.len() > width {
        let (piece, tail) = rest.split_at(step);
        lines.push(format!("{piece}-"));
        rest = tail;
    }

    rest
}

const COMMANDS: &[(&str, &str)] = &[
    ("getos", "Print the operating system of this machine."),
    ("getarch", "Print the architecture of this machine."),
    (
        "setrepo PATH",
        "Validate a clone of the runtime repo, and print its absolute path.",
    ),
    ("setos OS", "Validate and print a default operating system."),
    ("setarch ARCH", "Validate and print a default architecture."),
    (
        "setconfig CONFIG",
        "Validate and print a default configuration (Debug, Checked, or Release).",
    ),
    (
        "build main [ARG ...]",
        "Print the command line of the runtime repo build script.",
    ),
    (
        "build tests [ARG ...]",
        "Print the command line of the coreclr tests build script.",
    ),
];

const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;
// Used when there isn't a terminal to measure (ex: the output is captured by the shell).
const DEFAULT_TOTAL_WIDTH: usize = 80;

/// Prints the usage listing of the front door.
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn print_usage(
        &self,
        program: impl Into<String>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let left_column_width = COMMANDS.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
        let middle_column_width = COMMANDS
            .iter()
            .map(|(_, middle)| middle.len() + MAIN_INDENT)
            .max()
            .unwrap_or(0);
        let column_renderer = ColumnRenderer::guided(
            PaddingWidth(PADDING_WIDTH),
            LeftWidth(left_column_width),
            MiddleWidth::new(middle_column_width),
            TotalWidth(self.terminal_width.unwrap_or(DEFAULT_TOTAL_WIDTH)),
        );

        user_interface.print_error(format!(
            "usage: {p} COMMAND [ARG ...]",
            p = program.into()
        ));
        user_interface.print_error("".to_string());
        user_interface.print_error("commands:".to_string());

        for (left, middle) in COMMANDS {
            for line in column_renderer.render(MAIN_INDENT, left, middle) {
                user_interface.print_error(line);
            }
        }
    }
}
