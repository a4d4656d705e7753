use std::io::{Stdout, Write};

use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEventKind},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

/// Outcome of feeding one key to a line being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edit {
    Continue,
    Submit,
    Cancel,
}

/// Applies a key press to `input`. Only printable, non-space characters are typed.
pub(crate) fn apply_key(input: &mut String, code: KeyCode) -> Edit {
    match code {
        KeyCode::Enter => Edit::Submit,
        KeyCode::Esc => Edit::Cancel,
        KeyCode::Backspace => {
            input.pop();
            Edit::Continue
        }
        KeyCode::Char(c) if !c.is_whitespace() && !c.is_control() => {
            input.push(c);
            Edit::Continue
        }
        _ => Edit::Continue,
    }
}

/// Prompt for one side of the maze, bounded by what fits on screen.
pub(crate) struct SidePrompt {
    pub label: &'static str,
    pub max: u16,
}

impl SidePrompt {
    /// Largest odd side that fits in `term_size` terminal cells of `cell_width` columns.
    /// Odd sides keep the far corner on a carved cell.
    pub fn fitting(label: &'static str, term_size: u16, cell_width: u16) -> Self {
        let n = (term_size / cell_width.max(1)).max(1);
        let max = if n % 2 == 0 { n - 1 } else { n };
        SidePrompt { label, max }
    }

    /// Empty input selects the largest side.
    pub fn validate(&self, input: &str) -> Result<u16, String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(self.max);
        }
        match input.parse::<u16>() {
            Ok(n) if (1..=self.max).contains(&n) => Ok(n),
            _ => Err(format!(
                "Please enter a whole number between 1 and {}, or leave empty for {}.",
                self.max, self.max
            )),
        }
    }

    /// Redraws the prompt line, colored by whether the input is currently valid,
    /// with the validation message underneath.
    fn redraw(&self, stdout: &mut Stdout, input: &str) -> std::io::Result<()> {
        let verdict = self.validate(input);
        let input_color = if verdict.is_ok() { Color::Green } else { Color::Red };
        queue!(
            stdout,
            cursor::RestorePosition,
            terminal::Clear(ClearType::FromCursorDown),
            style::PrintStyledContent(self.label.with(Color::Cyan).attribute(Attribute::Bold)),
            style::PrintStyledContent(input.with(input_color)),
            style::Print(" \r\n"),
        )?;
        if let Err(msg) = verdict {
            queue!(
                stdout,
                style::PrintStyledContent(msg.with(Color::DarkGrey).attribute(Attribute::Dim))
            )?;
        }
        stdout.flush()
    }

    /// Reads a side length from the keyboard. Returns None if the user pressed Esc.
    pub fn read(&self, stdout: &mut Stdout) -> std::io::Result<Option<u16>> {
        queue!(stdout, cursor::Hide, cursor::SavePosition)?;
        let mut input = String::new();

        let value = loop {
            self.redraw(stdout, &input)?;
            let event::Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match apply_key(&mut input, key.code) {
                Edit::Continue => {}
                Edit::Cancel => break None,
                // An invalid submission keeps the prompt open
                Edit::Submit => {
                    if let Ok(side) = self.validate(&input) {
                        break Some(side);
                    }
                }
            }
        };

        queue!(
            stdout,
            cursor::RestorePosition,
            terminal::Clear(ClearType::FromCursorDown),
            cursor::Show
        )?;
        stdout.flush()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitting_side_is_odd() {
        assert_eq!(SidePrompt::fitting("W", 80, 2).max, 39);
        assert_eq!(SidePrompt::fitting("W", 82, 2).max, 41);
        assert_eq!(SidePrompt::fitting("H", 24, 1).max, 23);
        assert_eq!(SidePrompt::fitting("W", 1, 2).max, 1);
        assert_eq!(SidePrompt::fitting("H", 0, 1).max, 1);
    }

    #[test]
    fn test_validate() {
        let prompt = SidePrompt { label: "Width: ", max: 39 };
        assert_eq!(prompt.validate(""), Ok(39));
        assert_eq!(prompt.validate(" 21 "), Ok(21));
        assert!(prompt.validate("0").is_err());
        assert!(prompt.validate("40").is_err());
        assert!(prompt.validate("-5").is_err());
        assert!(prompt.validate("7.5").is_err());
    }

    #[test]
    fn test_apply_key_edits_line() {
        let mut input = String::new();
        assert_eq!(apply_key(&mut input, KeyCode::Char('2')), Edit::Continue);
        assert_eq!(apply_key(&mut input, KeyCode::Char(' ')), Edit::Continue);
        assert_eq!(apply_key(&mut input, KeyCode::Char('1')), Edit::Continue);
        assert_eq!(input, "21");
        assert_eq!(apply_key(&mut input, KeyCode::Backspace), Edit::Continue);
        assert_eq!(input, "2");
        assert_eq!(apply_key(&mut input, KeyCode::Left), Edit::Continue);
        assert_eq!(apply_key(&mut input, KeyCode::Enter), Edit::Submit);
        assert_eq!(apply_key(&mut input, KeyCode::Esc), Edit::Cancel);
        assert_eq!(input, "2");
    }
}
