//! Terminal UI utilities.
//!
//! This module provides the pieces every command uses to talk to the user:
//!
//! - `Style` - Renders labelled status lines, with or without ANSI colors
//! - `Spinner` - Rotating cursor shown while a `mix` command runs
//!
//! ## Example
//!
//! ```rust
//! use mixdeps::ui::{Style, with_spinner};
//!
//! let style = Style::new(false);
//! println!("{}", style.success("Added", "ecto ~> 3.10.0 to mix.exs"));
//! let answer = with_spinner(&style, "Fetching info", || 42);
//! assert_eq!(answer, 42);
//! ```

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Glyphs cycled by the spinner. The trailing empty string is the finished frame.
const SPINNER_FRAMES: [&str; 5] = ["/", "-", "\\", "|", ""];
const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Width of the `=====` rule printed after each package's info block.
pub const SEPARATOR_WIDTH: usize = 50;

/// Output decoration settings, decided once in `main` and passed down.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors on unless disabled by flag, `NO_COLOR`, or a non-terminal stdout.
    pub fn detect(no_color: bool) -> Self {
        Self::new(!no_color && console::colors_enabled())
    }

    /// `ERROR: <msg>` in bold red.
    pub fn error(&self, msg: impl AsRef<str>) -> String {
        format!("{} {}", self.paint("ERROR:", Color::Red), msg.as_ref())
    }

    /// `✓ <tag>: <msg>` in bold green.
    pub fn success(&self, tag: &str, msg: impl AsRef<str>) -> String {
        format!(
            "{} {}",
            self.paint(&format!("✓ {}:", tag), Color::Green),
            msg.as_ref()
        )
    }

    /// `✓ <tag>: <msg>` in bold yellow. Used for skips, which are not errors.
    pub fn warning(&self, tag: &str, msg: impl AsRef<str>) -> String {
        format!(
            "{} {}",
            self.paint(&format!("✓ {}:", tag), Color::Yellow),
            msg.as_ref()
        )
    }

    /// Whole line in bold cyan.
    pub fn info(&self, msg: impl AsRef<str>) -> String {
        self.paint(msg.as_ref(), Color::Cyan)
    }

    /// A standalone success line with no tag, e.g. `✓ Dependencies fully removed!`.
    pub fn done(&self, msg: impl AsRef<str>) -> String {
        self.paint(&format!("✓ {}", msg.as_ref()), Color::Green)
    }

    /// `<name>: <value>` with the label in bold yellow.
    pub fn field(&self, name: &str, value: impl AsRef<str>) -> String {
        format!(
            "{} {}",
            self.paint(&format!("{}:", name), Color::Yellow),
            value.as_ref()
        )
    }

    /// Dimmed detail line, used for verbose command echo.
    pub fn detail(&self, msg: impl AsRef<str>) -> String {
        if self.color {
            msg.as_ref().dimmed().to_string()
        } else {
            msg.as_ref().to_string()
        }
    }

    pub fn separator(&self) -> String {
        "=".repeat(SEPARATOR_WIDTH)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.bold().color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// A rotating cursor drawn on stdout while a long call blocks the main thread.
///
/// The ticker runs on its own thread; [`Spinner::stop`] signals it, waits for
/// it, and clears the line, so callers can print again as soon as it returns.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn start(style: &Style, message: &str) -> Self {
        let template = if style.color {
            "{msg:.cyan.bold}... {spinner:.cyan.bold} "
        } else {
            "{msg}... {spinner} "
        };

        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::with_template(template)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(SPINNER_TICK);

        Self { pb }
    }

    pub fn stop(self) {
        self.pb.finish_and_clear();
    }
}

/// Run `f` with a spinner on screen; the line is cleared before returning.
pub fn with_spinner<T>(style: &Style, message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = Spinner::start(style, message);
    let result = f();
    spinner.stop();
    result
}
