use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated home directory with its own idea store.
pub struct IdbWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
    pub store_dir: PathBuf,
}

impl IdbWorkspace {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        let root = temp.path().to_path_buf();
        let store_dir = root.join(".idb");
        Self {
            _temp: temp,
            root,
            store_dir,
        }
    }

    pub fn store_file(&self) -> PathBuf {
        self.store_dir.join("ideas.json")
    }

    /// Command with HOME, XDG_CONFIG_HOME and IDB_DIR pointed at the workspace.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("idb").expect("idb binary");
        cmd.current_dir(&self.root)
            .env("HOME", &self.root)
            .env("XDG_CONFIG_HOME", self.root.join(".config"))
            .env("IDB_DIR", &self.store_dir)
            .env_remove("IDB_CONFIG")
            .env_remove("IDB_LOG")
            .env_remove("COLORTERM");
        cmd
    }
}

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_idb<I, S>(workspace: &IdbWorkspace, args: I, label: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = workspace
        .command()
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run idb: {e}"));

    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Short hash printed by `idb add` ("Added {hash}: {title}").
pub fn added_hash(output: &RunOutput) -> String {
    output
        .stdout
        .strip_prefix("Added ")
        .and_then(|rest| rest.split(':').next())
        .map(str::to_string)
        .unwrap_or_else(|| panic!("unexpected add output: {}", output.stdout))
}
