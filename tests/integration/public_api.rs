use std::ffi::OsString;

use crate::helpers::prelude::*;

use scaffold_gen::{generate, parse_args, ScaffoldError};

#[test]
fn it_allows_generate_call_with_public_args_and_returns_the_generated_path() {
    let cwd_before = std::env::current_dir().unwrap();

    let templates = create_templates();
    let dir = tempdir().build();

    let args = parse_args::<_, OsString>([
        OsString::from("scaffold-gen"),
        OsString::from("new"),
        OsString::from("cli"),
        OsString::from("--name"),
        OsString::from("foobar_project"),
        OsString::from("--no-post-create"),
        OsString::from("--templates-dir"),
        templates.path().into(),
        OsString::from("--destination"),
        dir.path().into(),
    ])
    .expect("arguments parse");

    let report = generate(args).expect("cannot generate project");

    assert_eq!(report.project_dir, dir.path().join("foobar_project"));
    assert_eq!(report.created.first(), Some(&report.project_dir));
    assert_eq!(report.created.len(), 4);
    assert_eq!(dir.read("foobar_project/greeting.txt"), "Hello, foobar_project!");

    let cwd_after = std::env::current_dir().unwrap();
    assert!(cwd_after == cwd_before);
}

#[test]
fn errors_keep_their_kind_behind_stage_context() {
    let templates = create_templates();
    let dir = tempdir().file("taken/file.txt", "x").build();

    let args = parse_args::<_, OsString>([
        OsString::from("scaffold-gen"),
        OsString::from("new"),
        OsString::from("cli"),
        OsString::from("-name=taken"),
        OsString::from("-no-post-create"),
        OsString::from("--templates-dir"),
        templates.path().into(),
        OsString::from("--destination"),
        dir.path().into(),
    ])
    .unwrap();

    let err = generate(args).unwrap_err();

    assert!(format!("{err:#}").starts_with("create: new project: make directory"));
    assert!(matches!(
        err.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::DirectoryCreation { .. })
    ));
}
