use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Build a journaler command sandboxed against the real user environment:
/// HOME and XDG_CONFIG_HOME point into the given root, editor vars cleared.
pub fn journaler_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("journaler").unwrap();
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

#[allow(dead_code)]
pub fn config_path(home: &Path) -> PathBuf {
    home.join(".config").join("journaler").join("journaler.toml")
}

#[allow(dead_code)]
pub fn write_config(home: &Path, contents: &str) {
    let path = config_path(home);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}
