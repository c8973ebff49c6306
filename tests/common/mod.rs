#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;

pub const BIN_NAME: &str = "expense-tracker";

/// Isolated application home; config and data documents live under it.
pub struct TestHome {
    pub dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp home"),
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.env("EXPENSE_TRACKER_HOME", self.dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert()
    }

    pub fn expenses_json(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("data").join("expenses.json"))
            .expect("read expenses.json")
    }
}

pub fn add_args<'a>(description: &'a str, amount: &'a str, category: &'a str, date: &'a str) -> Vec<&'a str> {
    vec![
        "add",
        "--description",
        description,
        "--amount",
        amount,
        "--category",
        category,
        "--date",
        date,
    ]
}
