use std::env;
use std::io::{self, BufRead, Write};

use rustyline::DefaultEditor;

mod environment;
mod executor;

use crate::{
    core::{commands::CommandExecutor, env::EnvStore},
    error::ShellError,
    flags::Flags,
    output::{maybe_show_prompt, show_prompt, stdin_is_interactive, write_str, Reporter, PROMPT},
    process::InterruptFlag,
};

use executor::CommandHandler;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LoopAction {
    Continue,
    Exit,
}

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) store: EnvStore,
    pub(crate) executor: CommandExecutor,
    pub(crate) reporter: Reporter,
    pub(crate) interrupt: InterruptFlag,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;

        // The store lives from here until the loop returns; builtins only
        // ever borrow it.
        let store = EnvStore::from_process_env()?;
        let executor = CommandExecutor::new(&flags)?;

        let shell_name = env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        let reporter = Reporter::new(shell_name);

        // The SIGINT callback only raises the flag; teardown happens at
        // the loop's safe points.
        let interrupt = InterruptFlag::new();
        interrupt.install()?;

        Ok(Shell {
            editor,
            store,
            executor,
            reporter,
            interrupt,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if stdin_is_interactive() {
            self.run_interactive()?;
        } else {
            self.run_batch()?;
        }
        self.store.teardown();
        Ok(())
    }

    fn run_interactive(&mut self) -> Result<(), ShellError> {
        loop {
            self.drain_pending_interrupt();

            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("Warning: Couldn't add to history: {}", e);
                        }
                    }

                    if self.execute_command(&line)? == LoopAction::Exit {
                        break;
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    // rustyline reports the keypress itself; fold it into
                    // the same teardown path as a mid-command signal.
                    self.interrupt.raise();
                    self.drain_pending_interrupt();
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }
        Ok(())
    }

    fn run_batch(&mut self) -> Result<(), ShellError> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut lines = stdin.lock().lines();

        loop {
            self.drain_pending_interrupt();
            maybe_show_prompt(&mut stdout);

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            if self.execute_command(&line)? == LoopAction::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Safe-point check for an interrupt that arrived asynchronously.
    fn drain_pending_interrupt(&mut self) {
        if self.interrupt.take() {
            handle_interrupt(&mut self.store, &mut io::stdout());
        }
    }
}

/// The interrupt response: release every store entry, then re-emit the
/// prompt on a fresh line.
pub(crate) fn handle_interrupt<W: Write>(store: &mut EnvStore, out: &mut W) {
    store.teardown();
    let _ = write_str("\n", out);
    show_prompt(out);
}
