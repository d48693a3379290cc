//! End-to-end tests for `groundwork print-env` against a real state
//! directory on disk. Only file-backed collaborators are exercised; the
//! director-mode path needs neither terraform nor a cloud login.

#![allow(clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn groundwork() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("groundwork"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_director_environment(dir: &Path) {
    std::fs::write(
        dir.join("groundwork-state.json"),
        r#"{
            "version": 14,
            "iaas": "azure",
            "noDirector": false,
            "director": {
                "username": "admin",
                "password": "director-secret",
                "address": "https://10.0.0.6:25555",
                "caCert": "DIRECTOR-CA"
            },
            "jumpbox": {"url": "198.51.100.7:22"}
        }"#,
    )
    .expect("write state");

    let vars = dir.join("vars");
    std::fs::create_dir(&vars).expect("mkdir vars");
    std::fs::write(
        vars.join("jumpbox-vars-store.yml"),
        "jumpbox_ssh:\n  private_key: JUMPBOX-KEY-MATERIAL\n",
    )
    .expect("write jumpbox vars");
    std::fs::write(vars.join("director-vars-file.yml"), "internal_ip: 10.0.0.6\n")
        .expect("write director vars file");
    std::fs::write(
        vars.join("director-vars-store.yml"),
        "credhub_ca:\n  certificate: CRED-CA\nuaa_ssl:\n  ca: UAA-CA\ncredhub_cli_password: hunter2\n",
    )
    .expect("write director vars store");
}

#[test]
fn print_env_fails_without_an_environment() {
    let dir = tempfile::tempdir().expect("tempdir");

    groundwork()
        .arg("print-env")
        .arg("--state-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("groundwork-state.json is missing"));
}

#[test]
fn print_env_prints_exports_for_a_director_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_director_environment(dir.path());

    let assert = groundwork()
        .arg("print-env")
        .arg("--state-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("export BOSH_CLIENT=admin"))
        .stdout(predicate::str::contains(
            "export BOSH_CLIENT_SECRET=director-secret",
        ))
        .stdout(predicate::str::contains("export BOSH_CA_CERT='DIRECTOR-CA'"))
        .stdout(predicate::str::contains(
            "export BOSH_ENVIRONMENT=https://10.0.0.6:25555",
        ))
        .stdout(predicate::str::contains(
            "export CREDHUB_SERVER=https://10.0.0.6:8844",
        ))
        .stdout(predicate::str::contains(
            "export CREDHUB_CA_CERT='CRED-CAUAA-CA'",
        ))
        .stdout(predicate::str::contains("export CREDHUB_USER=credhub-cli"))
        .stdout(predicate::str::contains("export CREDHUB_PASSWORD=hunter2"))
        .stdout(predicate::str::contains(
            "export BOSH_ALL_PROXY=ssh+socks5://jumpbox@198.51.100.7:22?private-key=$JUMPBOX_PRIVATE_KEY",
        ));

    // The key really lands on disk at the advertised path.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let key_path = stdout
        .lines()
        .find_map(|l| l.strip_prefix("export JUMPBOX_PRIVATE_KEY="))
        .expect("jumpbox key line");
    assert!(key_path.ends_with("bosh_jumpbox_private.key"), "{key_path}");
    let key = std::fs::read_to_string(key_path).expect("key file");
    assert_eq!(key, "JUMPBOX-KEY-MATERIAL");

    if let Some(parent) = Path::new(key_path).parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}

#[test]
fn print_env_warns_but_succeeds_when_credhub_vars_are_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_director_environment(dir.path());
    std::fs::remove_file(dir.path().join("vars").join("director-vars-store.yml"))
        .expect("drop credhub vars");

    groundwork()
        .arg("print-env")
        .arg("--state-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("export BOSH_CLIENT=admin"))
        .stdout(predicate::str::contains("export CREDHUB_USER=credhub-cli"))
        .stdout(predicate::str::contains("export JUMPBOX_PRIVATE_KEY="))
        .stderr(predicate::str::contains("No credhub certs found."))
        .stderr(predicate::str::contains("No credhub password found."));
}
