use serde_json::{Value, json};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

/// A private working directory per test, so no stray `abem.toml` is
/// picked up as the default config.
struct Workdir {
    path: PathBuf,
}

impl Workdir {
    fn new(label: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        let path = std::env::temp_dir().join(format!(
            "abem-{label}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("workdir should be created");
        Self { path }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, contents).expect("file should be written");
        path
    }

    fn abem<I, S>(&self, args: I) -> Output
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Command::new(env!("CARGO_BIN_EXE_abem"))
            .current_dir(&self.path)
            .args(args)
            .output()
            .expect("abem should run")
    }
}

impl Drop for Workdir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn stdout_ok(output: &Output) -> String {
    assert!(
        output.status.success(),
        "abem exited with {:?}: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json_ok(output: &Output) -> Value {
    serde_json::from_str(&stdout_ok(output)).expect("stdout should be JSON")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path should be utf-8")
}

#[test]
fn class_with_element_and_modifiers() {
    let dir = Workdir::new("class");
    let output = dir.abem([
        "class", "block", "--elem", "elem", "--mod", "fooBar", "--mod", "baz",
    ]);
    assert_eq!(stdout_ok(&output).trim_end(), "block__elem -fooBar -baz");
}

#[test]
fn class_with_json_modifiers() {
    let dir = Workdir::new("class-json");
    let output = dir.abem([
        "class",
        "block",
        "--mods-json",
        r#"{"foo": true, "bar": false, "bazQux": 1}"#,
        "--json",
    ]);
    let payload = json_ok(&output);
    assert_eq!(payload["class"], "block -foo -bazQux");
    assert_eq!(payload["block"], "block");
    assert_eq!(payload["elem"], Value::Null);
}

#[test]
fn class_rejects_nested_element() {
    let dir = Workdir::new("nested");
    let output = dir.abem(["class", "block__elem", "--elem", "what"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("already names an element"));
}

#[test]
fn class_rejects_modifier_with_whitespace() {
    let dir = Workdir::new("mod-space");
    let output = dir.abem(["class", "block", "--mod", "is open"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("modifier names must not contain whitespace"));
}

#[test]
fn call_dispatches_on_argument_shape() {
    let dir = Workdir::new("call");
    let output = dir.abem(["call", "block", r#"["FooBar", "BAZ-Qux", "DOMContentLoaded"]"#]);
    assert_eq!(
        stdout_ok(&output).trim_end(),
        "block -fooBar -BAZQux -DOMContentLoaded"
    );

    let payload = json_ok(&dir.abem(["call", "block", "elem", "--json"]));
    assert_eq!(
        payload,
        json!({"arity": 2, "kind": "element", "class": "block__elem"})
    );
}

#[test]
fn call_without_arguments_reports_unbound_builder() {
    let dir = Workdir::new("unbound");
    let payload = json_ok(&dir.abem(["call", "--json"]));
    assert_eq!(payload["kind"], "unbound");
    assert_eq!(payload["class"], Value::Null);
}

#[test]
fn call_rejects_unsupported_shape() {
    let dir = Workdir::new("bad-shape");
    assert_eq!(dir.abem(["call", "block", "true"]).status.code(), Some(2));
}

#[test]
fn join_drops_falsy_values() {
    let dir = Workdir::new("join");
    let output = dir.abem(["join", "foo", "false", "bar", "null", "", "baz"]);
    assert_eq!(stdout_ok(&output).trim_end(), "foo bar baz");
    assert_eq!(stdout_ok(&dir.abem(["join"])).trim_end(), "");
}

#[test]
fn normalize_prints_one_token_per_line() {
    let dir = Workdir::new("normalize");
    let output = dir.abem([
        "normalize",
        "--",
        "----Foo-------Bar",
        "BAZ--Qux",
        "-DOM-Content-Loaded",
    ]);
    assert_eq!(stdout_ok(&output), "fooBar\nBAZQux\nDOMContentLoaded\n");
}

#[test]
fn normalize_json_keeps_repeated_tokens() {
    let dir = Workdir::new("normalize-json");
    let payload = json_ok(&dir.abem(["normalize", "--json", "FooBar", "FooBar"]));
    assert_eq!(
        payload,
        json!([
            {"token": "FooBar", "normalized": "fooBar"},
            {"token": "FooBar", "normalized": "fooBar"},
        ])
    );
}

#[test]
fn config_file_changes_conventions() {
    let dir = Workdir::new("config");
    let config = dir.write(
        "custom.toml",
        "element_separator = \"--\"\nmodifier_prefix = \"is-\"\n",
    );
    let output = dir.abem([
        "--config",
        path_arg(&config),
        "class",
        "main-nav",
        "--elem",
        "item",
        "--mod",
        "open",
    ]);
    assert_eq!(stdout_ok(&output).trim_end(), "main-nav--item is-open");
}

#[test]
fn default_config_is_read_from_working_directory() {
    let dir = Workdir::new("cwd-config");
    dir.write("abem.toml", "modifier_prefix = \"_\"\n");
    let output = dir.abem(["class", "card", "--mod", "open"]);
    assert_eq!(stdout_ok(&output).trim_end(), "card _open");
}

#[test]
fn invalid_config_fails() {
    let dir = Workdir::new("bad-config");
    let config = dir.write("bad.toml", "element_separator = \"-\"\n");
    let output = dir.abem(["--config", path_arg(&config), "class", "card"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("element_separator"));
}
