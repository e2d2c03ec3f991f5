//! Interactive menu loop

use crate::cli::output::OutputFormatter;
use crate::cli::prompt::{prompt_line, wait_for_enter};
use crate::core::directory::resolve_directory;
use crate::core::invoker::ProcessInvoker;
use crate::core::preset::{render_command, Preset, PresetKind};
use crate::error::AppError;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Preset(PresetKind),
    Quit,
    Unrecognized,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return MenuChoice::Quit;
        }
        PresetKind::from_key(input)
            .map(MenuChoice::Preset)
            .unwrap_or(MenuChoice::Unrecognized)
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    InputClosed,
}

/// Print the exit notice after Ctrl-C and return the process exit status
pub fn interrupt_notice<W: Write + ?Sized>(formatter: &OutputFormatter, out: &mut W) -> i32 {
    let _ = formatter.print_exit(out);
    let _ = out.flush();
    0
}

enum Step {
    Continue,
    Quit,
}

/// Menu session bound to an input, an output and a downloader
pub struct Session<R, W, I> {
    input: R,
    output: W,
    invoker: I,
    formatter: OutputFormatter,
    working_dir: Option<PathBuf>,
    clear_screen: bool,
}

impl<R, W, I> Session<R, W, I>
where
    R: BufRead,
    W: Write,
    I: ProcessInvoker,
{
    pub fn new(input: R, output: W, invoker: I, formatter: OutputFormatter) -> Self {
        Self {
            input,
            output,
            invoker,
            formatter,
            working_dir: None,
            clear_screen: false,
        }
    }

    /// Directory used for blank input and failed creation; defaults to the process cwd
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until quit or end of input
    pub fn run(&mut self) -> Result<SessionEnd, AppError> {
        loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Quit) => {
                    info!("Quit requested");
                    return Ok(SessionEnd::Quit);
                }
                Err(AppError::InputClosed) => {
                    info!("Input closed");
                    self.formatter.print_exit(&mut self.output)?;
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> Result<Step, AppError> {
        self.show_menu()?;

        let raw = self.prompt("\nSelect an option: ")?;
        match MenuChoice::parse(&raw) {
            MenuChoice::Quit => Ok(Step::Quit),
            MenuChoice::Unrecognized => {
                debug!("Unrecognized choice {:?}", raw);
                Ok(Step::Continue)
            }
            MenuChoice::Preset(kind) => {
                self.handle_request(kind)?;
                Ok(Step::Continue)
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        if self.clear_screen {
            // Not fatal: a terminal that refuses to clear still shows the menu
            if let Err(e) = console::Term::stdout().clear_screen() {
                debug!("Could not clear screen: {}", e);
            }
        }
        self.formatter
            .print_menu(&mut self.output, self.invoker.program())?;
        Ok(())
    }

    /// One full request: URL, directory, preset, invocation, pause
    fn handle_request(&mut self, kind: PresetKind) -> Result<(), AppError> {
        let url = self.prompt("Enter the URL: ")?.trim().to_string();
        if url.is_empty() {
            debug!("Blank URL, back to menu");
            return Ok(());
        }

        self.formatter.print_directory_prompt(&mut self.output)?;
        let raw_dir = self.prompt("Path > ")?;
        let cwd = self.working_dir();
        let resolution = resolve_directory(&raw_dir, &cwd);
        if let Some(err) = &resolution.fallback {
            self.formatter.error(&mut self.output, &err.to_string())?;
        }
        info!("Saving to {}", resolution.path.display());
        self.formatter.debug(
            &mut self.output,
            &format!("Saving to {}", resolution.path.display()),
        )?;

        let custom_format = if kind == PresetKind::Custom {
            self.formatter.print_format_hints(&mut self.output)?;
            Some(self.prompt("Enter format string: ")?)
        } else {
            None
        };

        let preset = Preset::from_kind(kind, custom_format);
        let args = preset.build_args(&url);
        debug!("Preset {} -> {:?}", preset, args);

        self.formatter.print_command(
            &mut self.output,
            &render_command(self.invoker.program(), &args),
        )?;
        self.output.flush()?;

        let outcome = self.invoker.invoke(&args, &resolution.path);
        if !outcome.is_success() {
            debug!("Request for {} failed: {:?}", url, outcome);
        }
        self.formatter.print_outcome(&mut self.output, &outcome)?;

        wait_for_enter(
            &mut self.input,
            &mut self.output,
            "\nPress Enter to return to menu...",
        )
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, AppError> {
        prompt_line(&mut self.input, &mut self.output, prompt)
    }

    fn working_dir(&self) -> PathBuf {
        self.working_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
