use assert_cmd::Command;
use test_support::TreeBuilder;

fn srcscan() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_srcscan"));
    command.env_remove("GOROOT").env_remove("GOPATH").env_remove("SRCSCAN_LOG");
    command
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn help_lists_usage() {
    let output = srcscan().arg("--help").output().expect("run srcscan");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(stdout_of(&output).contains("Usage: srcscan"));
}

#[test]
fn version_prints_package_version() {
    let output = srcscan().arg("-V").output().expect("run srcscan");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!("srcscan {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn unknown_flag_exits_with_usage_status() {
    let output = srcscan()
        .arg("--definitely-not-a-flag")
        .output()
        .expect("run srcscan");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_goroot_fails() {
    let output = srcscan().output().expect("run srcscan");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("GOROOT is not set"), "{stderr}");
}

#[test]
fn lists_directories_from_environment_roots() {
    let tree = TreeBuilder::new();
    tree.file("goroot/src/fmt/print.go")
        .file("goroot/src/net/http/server.go")
        .file("gopath/src/example.com/tool/main.go");

    let output = srcscan()
        .env("GOROOT", tree.join("goroot"))
        .env("GOPATH", tree.join("gopath"))
        .output()
        .expect("run srcscan");
    assert!(output.status.success());

    let expected: String = tree
        .paths(&[
            "goroot/src/fmt",
            "goroot/src/net/http",
            "gopath/src/example.com/tool",
        ])
        .iter()
        .map(|path| format!("{}\n", path.display()))
        .collect();
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn unreadable_root_is_logged_without_failing() {
    let tree = TreeBuilder::new();
    tree.file("goroot/src/fmt/print.go");

    let output = srcscan()
        .arg("--goroot")
        .arg(tree.join("goroot"))
        .arg("--gopath")
        .arg(tree.join("missing"))
        .output()
        .expect("run srcscan");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!("{}\n", tree.join("goroot/src/fmt").display())
    );
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("skipping directory"), "{stderr}");
}

#[test]
fn missing_package_exits_with_failure() {
    let tree = TreeBuilder::new();
    tree.file("goroot/src/fmt/print.go");

    let output = srcscan()
        .args(["-q", "--gopath"])
        .arg(tree.join("gopath"))
        .arg("--goroot")
        .arg(tree.join("goroot"))
        .args(["fmt", "nosuchpkg"])
        .output()
        .expect("run srcscan");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        format!("{}\n", tree.join("goroot/src/fmt").display())
    );
}
