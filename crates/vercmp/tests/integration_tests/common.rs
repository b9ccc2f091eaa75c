use std::{collections::HashMap, process::Command};

pub struct VercmpTest {
    pub env: HashMap<String, String>,
}

impl VercmpTest {
    pub fn new() -> Self {
        Self {
            env: HashMap::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn vercmp(&self, args: &[&str]) -> VercmpOutput {
        let mut cmd = self.vercmp_command();
        cmd.args(args);

        let output = cmd.output().expect("Failed to execute vercmp command");
        VercmpOutput { output }
    }

    pub fn vercmp_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vercmp"));
        cmd.env_clear().envs(&self.env);
        cmd
    }
}

pub struct VercmpOutput {
    pub output: std::process::Output,
}

impl VercmpOutput {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Expected command to fail, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_code(&self, code: i32) -> &Self {
        assert_eq!(
            self.code(),
            Some(code),
            "Unexpected exit code, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Stdout without the trailing newline, for inline snapshots.
    pub fn trimmed_stdout(&self) -> String {
        self.stdout().trim_end().to_string()
    }
}
