
use fixtures::*;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn manifest_command() -> Command {
    Command::new(assert_cmd::cargo_bin!("witsml_manifest"))
}

#[test]
fn it_writes_a_manifest_for_every_sample() {
    let d = tempdir().unwrap();
    let out = d.path().join("nested").join("manifest.json");

    let mut cmd = manifest_command();
    cmd.args([
        "-i",
        &samples_dir().to_string_lossy(),
        "-o",
        &out.to_string_lossy(),
        "--owners",
        "a@osdu, ,b@osdu",
        "--data-partition",
        "com.mycompany",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Manifest written to"));

    let manifest: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
    let data = manifest["data"].as_array().unwrap();

    // Files are taken in lexical order, the `invalid` subdirectory is not descended into.
    let ids: Vec<_> = data
        .iter()
        .map(|c| c["resourceID"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            "com.mycompany:work-product-component:log-1",
            "com.mycompany:work-product-component:log-2",
            "com.mycompany:work-product-component:log-3",
        ]
    );
    assert_eq!(manifest["acl"]["owners"], serde_json::json!(["a@osdu", "b@osdu"]));
    assert_eq!(
        manifest["acl"]["viewers"],
        serde_json::json!(["data.default.viewer@osdu"])
    );
    assert_eq!(
        manifest["legal"]["legaltags"],
        serde_json::json!(["osdu-default-legaltag"])
    );
}

#[test]
fn it_does_not_warn_about_threads_unless_requested() {
    let d = tempdir().unwrap();
    let out = d.path().join("manifest.json");

    let mut cmd = manifest_command();
    cmd.args([
        "-i",
        &samples_dir().to_string_lossy(),
        "-o",
        &out.to_string_lossy(),
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("turned on threads").not());
}

#[test]
fn it_refuses_to_overwrite_without_flag() {
    let d = tempdir().unwrap();
    let out = d.path().join("manifest.json");
    fs::write(&out, "I'm a file!").unwrap();

    let mut cmd = manifest_command();
    cmd.args([
        "-i",
        &samples_dir().to_string_lossy(),
        "-o",
        &out.to_string_lossy(),
    ]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "I'm a file!");
}

#[test]
fn it_overwrites_file_anyways_if_passed_flag() {
    let d = tempdir().unwrap();
    let out = d.path().join("manifest.json");
    fs::write(&out, "I'm a file!").unwrap();

    let mut cmd = manifest_command();
    cmd.args([
        "-i",
        &samples_dir().to_string_lossy(),
        "-o",
        &out.to_string_lossy(),
        "--overwrite",
        "--no-indent",
    ]);

    cmd.assert().success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(!written.contains('\n'), "expected compact output");
    let manifest: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(manifest["data"].as_array().unwrap().len(), 3);
}

#[test]
fn it_refuses_to_overwrite_directory() {
    let d = tempdir().unwrap();

    let mut cmd = manifest_command();
    cmd.args([
        "-i",
        &samples_dir().to_string_lossy(),
        "-o",
        &d.path().to_string_lossy(),
        "--overwrite",
    ]);

    cmd.assert().failure().code(1);
}

#[test]
fn it_fails_on_a_bad_file_and_names_it() {
    let d = tempdir().unwrap();
    let out = d.path().join("manifest.json");

    let mut cmd = manifest_command();
    cmd.args([
        "-i",
        &invalid_samples_dir().to_string_lossy(),
        "-o",
        &out.to_string_lossy(),
        "-t",
        "1",
    ]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("doctype.xml"));
    assert!(!out.exists(), "no manifest should be written on failure");
}

#[test]
fn it_fails_on_a_directory_without_xml_files() {
    let d = tempdir().unwrap();
    fs::write(d.path().join("notes.txt"), "not xml").unwrap();
    let out = d.path().join("manifest.json");

    let mut cmd = manifest_command();
    cmd.args([
        "-i",
        &d.path().to_string_lossy(),
        "-o",
        &out.to_string_lossy(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No XML files found"));
}

#[test]
fn it_fails_on_a_missing_input_directory() {
    let d = tempdir().unwrap();

    let mut cmd = manifest_command();
    cmd.args([
        "-i",
        &d.path().join("missing").to_string_lossy(),
        "-o",
        &d.path().join("manifest.json").to_string_lossy(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn it_picks_up_uppercase_extensions() {
    let d = tempdir().unwrap();
    fs::copy(namespaced_sample(), d.path().join("LOG.XML")).unwrap();
    let out = d.path().join("out").join("manifest.json");

    let mut cmd = manifest_command();
    cmd.args([
        "-i",
        &d.path().to_string_lossy(),
        "-o",
        &out.to_string_lossy(),
        "-t",
        "1",
    ]);

    cmd.assert().success();
    let manifest: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
    assert_eq!(manifest["data"][0]["name"], "Gamma Ray");
}
