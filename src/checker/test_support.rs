//! Scripted [`ToolRunner`] shared by checker and runner tests.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use super::{ToolCommand, ToolOutput, ToolRunner};

type Script = Box<dyn Fn(&ToolCommand) -> io::Result<ToolOutput> + Send + Sync>;

/// Answers each program with a scripted closure and records every call.
/// Programs without a script behave as if they are not installed.
#[derive(Default)]
pub struct FakeRunner {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<ToolCommand>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        mut self,
        program: &str,
        script: impl Fn(&ToolCommand) -> io::Result<ToolOutput> + Send + Sync + 'static,
    ) -> Self {
        self.scripts.insert(program.to_string(), Box::new(script));
        self
    }

    /// `program` always succeeds silently.
    pub fn passing(self, program: &str) -> Self {
        self.on(program, |_| Ok(ok("")))
    }

    /// `program` always fails with `stderr`.
    pub fn failing(self, program: &str, stderr: &'static str) -> Self {
        self.on(program, move |_| Ok(fail(stderr)))
    }

    pub fn calls(&self) -> Vec<ToolCommand> {
        self.calls.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.program).collect()
    }
}

impl ToolRunner for FakeRunner {
    fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        self.calls.lock().unwrap().push(command.clone());
        match self.scripts.get(&command.program) {
            Some(script) => script(command),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "not installed")),
        }
    }
}

pub fn ok(stdout: &str) -> ToolOutput {
    ToolOutput {
        success: true,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn fail(stderr: &str) -> ToolOutput {
    ToolOutput {
        success: false,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}
