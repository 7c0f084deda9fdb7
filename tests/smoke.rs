use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("clinician-scope").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn lookup_requires_a_name() {
    let mut cmd = Command::cargo_bin("clinician-scope").expect("binary exists");
    cmd.arg("lookup").assert().failure();
}
