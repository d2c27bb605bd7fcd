#![cfg(unix)]

use crate::helpers::prelude::*;

#[test]
fn it_runs_build_then_test_inside_the_project() {
    let templates = tempdir()
        .with_default_templates()
        .config(indoc! {r#"
            [post_create]
            build = ["sh", "-c", "echo \"$0\" > built.txt", "build/{{.Name}}"]
            test = ["sh", "-c", "test -f built.txt && echo tested > tested.txt"]
        "#})
        .build();
    let dir = tempdir().build();

    binary()
        .arg_new("cli")
        .arg_name("acme")
        .arg_templates(templates.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("Done!").from_utf8());

    assert_eq!(dir.read("acme/built.txt"), "build/acme\n");
    assert_eq!(dir.read("acme/tested.txt"), "tested\n");
}

#[test]
fn project_scripts_run_by_relative_path() {
    let templates = tempdir()
        .with_default_templates()
        .file("cli/run.sh", "#!/bin/sh\necho \"ran in $(basename \"$PWD\")\" > ran.txt\n")
        .config(indoc! {r#"
            [post_create]
            build = ["chmod", "+x", "run.sh"]
            test = ["./run.sh"]
        "#})
        .build();
    let dir = tempdir().build();

    binary()
        .arg_new("cli")
        .arg_name("acme")
        .arg_templates(templates.path())
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(dir.read("acme/ran.txt"), "ran in acme\n");
}

#[test]
fn failing_build_skips_the_test_step() {
    let templates = tempdir()
        .with_default_templates()
        .config(indoc! {r#"
            [post_create]
            build = ["sh", "-c", "exit 4"]
            test = ["sh", "-c", "touch tested.txt"]
        "#})
        .build();
    let dir = tempdir().build();

    binary()
        .arg_new("cli")
        .arg_name("acme")
        .arg_templates(templates.path())
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("create: post create: build: exit status: 4").from_utf8());

    // generated files are left in place
    assert_eq!(dir.read("acme/greeting.txt"), "Hello, acme!");
    assert!(!dir.exists("acme/tested.txt"));
}

#[test]
fn hook_output_is_streamed() {
    let templates = tempdir()
        .with_default_templates()
        .config(indoc! {r#"
            [post_create]
            build = []
            test = ["sh", "-c", "echo hello from {{.Name}}"]
        "#})
        .build();
    let dir = tempdir().build();

    binary()
        .arg_new("cli")
        .arg_name("acme")
        .arg_templates(templates.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("hello from acme").from_utf8());
}

#[test]
fn missing_tool_is_a_post_create_failure() {
    let templates = tempdir()
        .with_default_templates()
        .config(indoc! {r#"
            [post_create]
            build = ["no-such-build-tool-for-scaffold-gen"]
        "#})
        .build();
    let dir = tempdir().build();

    binary()
        .arg_new("cli")
        .arg_name("acme")
        .arg_templates(templates.path())
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(
            predicates::str::contains("required tool 'no-such-build-tool-for-scaffold-gen'")
                .from_utf8(),
        );

    assert!(dir.exists("acme/greeting.txt"));
}

#[test]
fn no_post_create_skips_hooks() {
    let templates = tempdir()
        .with_default_templates()
        .config(indoc! {r#"
            [post_create]
            build = ["sh", "-c", "exit 1"]
        "#})
        .build();
    let dir = tempdir().build();

    binary()
        .arg_new("cli")
        .arg_name("acme")
        .arg_templates(templates.path())
        .arg_no_post_create()
        .current_dir(dir.path())
        .assert()
        .success();
}
