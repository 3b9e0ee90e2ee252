use crate::{RETAG_LOGLEVEL, RETAG_STYLE};
use dialoguer::console::{style, Style, StyledObject};
use dialoguer::theme::Theme;
use env_logger::{fmt::Color, Builder, Env};
use log::{Level, LevelFilter};
use std::fmt;
use std::io::Write;

pub fn init_logger() {
    let env = Env::default()
        .filter_or(RETAG_LOGLEVEL, "info")
        .write_style(RETAG_STYLE);

    Builder::from_env(env)
        .filter(Some("reqwest"), LevelFilter::Warn)
        .filter(Some("hyper"), LevelFilter::Warn)
        .filter(Some("rustls"), LevelFilter::Warn)
        .format(|buf, record| {
            let mut style = buf.style();
            let level = match record.level() {
                Level::Warn => style.set_color(Color::Yellow).value("   warn"),
                Level::Info => style.set_color(Color::Green).value("   info"),
                Level::Error => style.set_color(Color::Red).value("  error"),
                Level::Debug => style.set_color(Color::Blue).value("  debug"),
                Level::Trace => style
                    .set_color(Color::Blue)
                    .set_bold(true)
                    .value("  trace"),
            };

            writeln!(buf, "{} {}", level, record.args())
        })
        .init();
}

/// Terminal prompts aligned with the log level column.
pub struct DialoguerTheme {
    /// The style for default values
    pub defaults_style: Style,
    /// The style for prompt
    pub prompt_style: Style,
    /// The style for prompt after the answer has been given
    pub prompt_selection_style: Style,
    /// Prompt prefix value and style
    pub prompt_prefix: StyledObject<String>,
    /// Prompt on success prefix value and style
    pub success_prefix: StyledObject<String>,
    /// Error prefix value and style
    pub error_prefix: StyledObject<String>,
    /// The style for hints
    pub hint_style: Style,
    /// The style for values on prompt success
    pub values_style: Style,
}

impl Default for DialoguerTheme {
    fn default() -> Self {
        Self {
            defaults_style: Style::new().for_stderr().cyan(),
            prompt_style: Style::new().for_stderr().bold(),
            prompt_selection_style: Style::new().for_stderr(),
            prompt_prefix: style("      ?".to_string()).for_stderr().yellow(),
            success_prefix: style(" answer".to_string()).for_stderr().green(),
            error_prefix: style("  error".to_string()).for_stderr().red(),
            hint_style: Style::new().for_stderr().black().bright(),
            values_style: Style::new().for_stderr().green(),
        }
    }
}

impl Theme for DialoguerTheme {
    /// Formats a prompt.
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(
            f,
            "{} {} ",
            &self.prompt_prefix,
            self.prompt_style.apply_to(prompt)
        )
    }

    /// Formats an error.
    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        write!(f, "{} {}", &self.error_prefix, err)
    }

    /// Formats an input prompt.
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        if !prompt.is_empty() {
            write!(
                f,
                "{} {} ",
                &self.prompt_prefix,
                self.prompt_style.apply_to(prompt)
            )?;
        }

        match default {
            Some(default) => write!(
                f,
                "{} ",
                self.defaults_style.apply_to(&format!("({})", default)),
            ),
            None => write!(f, "{}", self.hint_style.apply_to("(empty to skip) ")),
        }
    }

    /// Formats an input prompt after selection.
    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        if !prompt.is_empty() {
            write!(
                f,
                "{} {} ",
                &self.success_prefix,
                self.prompt_selection_style.apply_to(prompt)
            )?;
        }

        write!(f, "{}", self.values_style.apply_to(sel))
    }
}
