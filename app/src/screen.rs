//! Writes a rendered `Screen` to the terminal.

use std::io::{self, Write};

use crossterm::style::Stylize;
use todo_view_core::{Row, Screen};

/// Plain mode writes `Screen`'s own text form. Styled mode strikes through
/// completed rows and colours the error banner and edit row.
pub fn draw<W: Write>(out: &mut W, screen: &Screen, styled: bool) -> io::Result<()> {
    if !styled {
        write!(out, "{screen}")?;
        return out.flush();
    }

    writeln!(out, "{}", screen.heading.bold())?;
    if let Some(error) = &screen.error {
        writeln!(out, "{}", format!("! {error}").red())?;
    }
    if screen.input.is_empty() {
        writeln!(out, "+ {}", screen.placeholder.dark_grey())?;
    } else {
        writeln!(out, "+ {}", screen.input)?;
    }
    for (index, row) in screen.rows.iter().enumerate() {
        let number = index + 1;
        match row {
            Row::Placeholder(text) => writeln!(out, "    {}", text.dark_grey())?,
            Row::Item { title, struck: true, .. } => {
                writeln!(out, "{number:>3} [x] {}", title.as_str().crossed_out())?
            }
            Row::Item { title, .. } => writeln!(out, "{number:>3} [ ] {title}")?,
            Row::Editing { buffer, .. } => writeln!(
                out,
                "{number:>3} {} {}",
                format!("> {buffer}").yellow(),
                "(save | cancel)".dark_grey()
            )?,
        }
    }
    out.flush()
}
