//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `vocab` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct VocabCommand {
    args: Vec<String>,
}

impl VocabCommand {
    /// Creates a new command for the `vocab` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--db` option to specify the database file.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("vocab").expect("Failed to find vocab binary");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `lookup` command with a word.
    pub fn lookup(self, word: &str) -> Self {
        self.args(["lookup", word])
    }

    /// Configures for the `save` command with a word.
    pub fn save(self, word: &str) -> Self {
        self.args(["save", word])
    }

    /// Configures for the `show` command with an id.
    pub fn show(self, id: i64) -> Self {
        self.args(["show", &id.to_string()])
    }

    /// Configures for the `rename` command.
    pub fn rename(self, id: i64, text: &str) -> Self {
        self.args(["rename", &id.to_string(), text])
    }

    /// Configures for the `set-notes` command.
    pub fn set_notes(self, id: i64, notes: &str) -> Self {
        self.args(["set-notes", &id.to_string(), notes])
    }

    /// Configures for the `edit-meaning` command.
    pub fn edit_meaning(self, id: i64) -> Self {
        self.args(["edit-meaning", &id.to_string()])
    }

    /// Configures for the `delete-meaning` command.
    pub fn delete_meaning(self, id: i64) -> Self {
        self.args(["delete-meaning", &id.to_string()])
    }

    /// Configures for the `export` command.
    pub fn export(self) -> Self {
        self.args(["export"])
    }

    /// Configures for the `home` command.
    pub fn home(self) -> Self {
        self.args(["home"])
    }

    // ===========================================
    // Flag Shortcuts
    // ===========================================

    /// Adds `--force` to a save command.
    pub fn with_force(self) -> Self {
        self.args(["--force"])
    }

    /// Adds `--definition <text>`.
    pub fn with_definition(self, definition: &str) -> Self {
        self.args(["--definition", definition])
    }

    /// Adds `--pos <tag>`.
    pub fn with_pos(self, pos: &str) -> Self {
        self.args(["--pos", pos])
    }

    /// Adds `--notes <text>`.
    pub fn with_notes(self, notes: &str) -> Self {
        self.args(["--notes", notes])
    }

    /// Adds `--format json`.
    pub fn json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for VocabCommand {
    fn default() -> Self {
        Self::new()
    }
}
