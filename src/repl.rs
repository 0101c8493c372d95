use std::io::{self, BufRead, Write};

use crate::{Command, NumericMode, run};

const TITLE: &str = "Welcome to the Math Expression Converter and Evaluator!";

const OPTIONS: [&str; 6] = ["1. Convert Infix to Postfix",
                            "2. Convert Infix to Prefix",
                            "3. Evaluate Postfix Expression",
                            "4. Evaluate Prefix Expression",
                            "5. Help",
                            "6. Exit"];

const HELP: [&str; 5] = ["Infix, Postfix, and Prefix are notations for writing mathematical expressions.",
                         "- Infix: Operators are written between operands (e.g., 2 + 3).",
                         "- Postfix: Operators are written after operands (e.g., 2 3 +).",
                         "- Prefix: Operators are written before operands (e.g., + 2 3).",
                         "Use this tool to convert between notations or evaluate expressions."];

/// A menu entry chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Run(Command),
    Help,
    Exit,
}

impl Choice {
    const fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Run(Command::ToPostfix)),
            2 => Some(Self::Run(Command::ToPrefix)),
            3 => Some(Self::Run(Command::EvalPostfix)),
            4 => Some(Self::Run(Command::EvalPrefix)),
            5 => Some(Self::Help),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// An interactive menu session reading from `R` and writing to `W`.
///
/// The session ends when the user confirms exit or the input runs out.
///
/// # Example
/// ```
/// use notation::{NumericMode, repl::Session};
///
/// let input = "1\n3 + 4 * 2\n\n6\ny\n";
/// let mut output = Vec::new();
/// Session::new(input.as_bytes(), &mut output, NumericMode::Real).run().unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("Postfix Expression: 3 4 2 * +"));
/// ```
pub struct Session<R, W> {
    input:  R,
    output: W,
    mode:   NumericMode,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session evaluating in `mode`.
    pub const fn new(input: R, output: W, mode: NumericMode) -> Self {
        Self { input,
               output,
               mode }
    }

    /// Runs the menu loop until exit or end of input.
    ///
    /// # Errors
    /// Only I/O errors on the underlying reader or writer; expression errors
    /// are printed and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.display_menu()?;
            let Some(choice) = self.read_choice()? else {
                return Ok(());
            };

            match choice {
                Choice::Exit => {
                    if self.confirm_exit()? {
                        writeln!(self.output,
                                 "Thank you for using the Math Expression Converter and Evaluator. Goodbye!")?;
                        return Ok(());
                    }
                    continue;
                },
                Choice::Help => self.display_help()?,
                Choice::Run(command) => self.handle(command)?,
            }

            writeln!(self.output, "\nPress Enter to continue...")?;
            if self.read_line()?.is_none() {
                return Ok(());
            }
        }
    }

    fn handle(&mut self, command: Command) -> io::Result<()> {
        write!(self.output, "Enter the {} expression: ", command.source())?;
        self.output.flush()?;
        let Some(expr) = self.read_line()? else {
            return Ok(());
        };

        match run(command, &expr, self.mode) {
            Ok(result) => writeln!(self.output, "{}: {result}", command.result_label()),
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                writeln!(self.output, "{e}")
            },
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let width = OPTIONS.iter().map(|o| o.len()).max().unwrap_or(0).max(TITLE.len());
        let border = "─".repeat(width + 4);

        writeln!(self.output, "╭{border}╮")?;
        writeln!(self.output, "│ {TITLE:^width$} │")?;
        writeln!(self.output, "├{border}┤")?;
        writeln!(self.output, "│ {:^width$} │", "Please choose an option:")?;
        for option in OPTIONS {
            writeln!(self.output, "│ {option:^width$} │")?;
        }
        writeln!(self.output, "╰{border}╯")?;
        write!(self.output, "Enter your choice (1-6): ")?;
        self.output.flush()
    }

    fn display_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Help: Understanding Infix, Postfix, and Prefix Notations")?;
        for line in HELP {
            writeln!(self.output, "  {line}")?;
        }
        Ok(())
    }

    /// Reads menu choices until one is valid. `None` on end of input.
    fn read_choice(&mut self) -> io::Result<Option<Choice>> {
        while let Some(line) = self.read_line()? {
            match line.parse::<i64>() {
                Ok(n) => match Choice::from_number(n) {
                    Some(choice) => return Ok(Some(choice)),
                    None => writeln!(self.output, "Please enter a number between 1 and 6.")?,
                },
                Err(_) => writeln!(self.output, "Invalid input. Please enter a valid number.")?,
            }
        }
        Ok(None)
    }

    fn confirm_exit(&mut self) -> io::Result<bool> {
        write!(self.output, "Are you sure you want to exit? (y/n): ")?;
        self.output.flush()?;
        Ok(match self.read_line()? {
               Some(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
               None => true,
           })
    }

    /// Reads one trimmed line. `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_output(input: &str, mode: NumericMode) -> String {
        let mut output = Vec::new();
        Session::new(input.as_bytes(), &mut output, mode).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn converts_and_exits() {
        let out = session_output("2\n1 + 2 * 3\n\n6\nyes\n", NumericMode::Real);
        assert!(out.contains("Enter the infix expression: "));
        assert!(out.contains("Prefix Expression: + 1 * 2 3"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn evaluates_in_the_session_mode() {
        let out = session_output("3\n7 2 /\n", NumericMode::Integer);
        assert!(out.contains("Result: 3"));
        let out = session_output("4\n/ 7 2\n", NumericMode::Real);
        assert!(out.contains("Result: 3.5"));
    }

    #[test]
    fn errors_are_printed_and_the_loop_continues() {
        let out = session_output("3\n6 0 /\n\n1\n(1 + 2\n\n6\ny\n", NumericMode::Real);
        assert!(out.contains("Division by zero is not allowed."));
        assert!(out.contains("Unbalanced parentheses in expression."));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn reprompts_on_bad_choices() {
        let out = session_output("abc\n9\n5\n\n6\nY\n", NumericMode::Real);
        assert!(out.contains("Invalid input. Please enter a valid number."));
        assert!(out.contains("Please enter a number between 1 and 6."));
        assert!(out.contains("Postfix: Operators are written after operands"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn out_of_range_numbers_get_the_range_message() {
        let out = session_output("-1\n300\n0\n6\ny\n", NumericMode::Real);
        assert_eq!(out.matches("Please enter a number between 1 and 6.").count(), 3);
        assert!(!out.contains("Invalid input."));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn declining_exit_shows_the_menu_again() {
        let out = session_output("6\nn\n6\ny\n", NumericMode::Real);
        assert_eq!(out.matches("Enter your choice (1-6): ").count(), 2);
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let out = session_output("", NumericMode::Real);
        assert!(out.contains("Enter your choice (1-6): "));
        assert!(!out.contains("Goodbye!"));
    }
}
