use crate::helpers::prelude::*;

#[test]
fn it_renders_templated_files() {
    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .arg_new("cli")
        .arg_name("acme")
        .arg_templates(templates.path())
        .arg_no_post_create()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("Done!").from_utf8());

    assert_eq!(dir.read("acme/greeting.txt"), "Hello, acme!");
    assert!(!dir.exists("acme/greeting.txt.tmpl"));
}

#[test]
fn it_creates_directories_before_their_files() {
    let templates = create_templates();
    let dir = tempdir().build();

    let output = binary()
        .arg_new("cli")
        .arg_name("demo")
        .arg_templates(templates.path())
        .arg_no_post_create()
        .current_dir(dir.path())
        .assert()
        .success()
        .get_output()
        .stderr
        .clone();
    let log = String::from_utf8(output).unwrap();

    let dir_line = log
        .find("creating directory: demo/src/")
        .expect("directory creation is logged");
    let file_line = log
        .find("creating file: demo/src/main.go")
        .expect("file creation is logged");
    assert!(dir_line < file_line);
    assert_eq!(
        dir.read("demo/src/main.go"),
        templates.read("cli/src/main.go")
    );
}

#[test]
fn it_copies_static_files_byte_for_byte() {
    let bytes = vec![0u8, 159, 146, 150, b'{', b'{', b'\r', b'\n'];
    let templates = tempdir()
        .with_default_templates()
        .bytes("cli/assets/logo.bin", &bytes)
        .file("cli/notes.txt", "{{.Name}} stays as is\r\n")
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

    assert_eq!(dir.read_bytes("acme/assets/logo.bin"), bytes);
    assert_eq!(dir.read("acme/notes.txt"), "{{.Name}} stays as is\r\n");
}

#[test]
fn it_keeps_empty_directories() {
    let templates = tempdir()
        .with_default_templates()
        .dir("cli/build")
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

    assert!(dir.path().join("acme/build").is_dir());
}

#[test]
fn it_accepts_the_single_dash_name_flag() {
    let templates = create_templates();
    let dir = tempdir().build();

    binary()
        .arg("new")
        .arg("CLI")
        .arg("-name=acme")
        .arg_templates(templates.path())
        .arg_no_post_create()
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(dir.read("acme/greeting.txt"), "Hello, acme!");
}

#[test]
fn it_generates_into_the_destination() {
    let templates = create_templates();
    let dir = tempdir().build();
    let cwd = tempdir().build();

    binary()
        .arg_new("cli")
        .arg_name("acme")
        .arg_templates(templates.path())
        .arg_no_post_create()
        .arg("--destination")
        .arg(dir.path())
        .current_dir(cwd.path())
        .assert()
        .success();

    assert!(dir.exists("acme/greeting.txt"));
    assert!(cwd.is_empty());
}

#[test]
fn config_defaults_and_flags_reach_templates() {
    let templates = tempdir()
        .config(indoc! {r#"
            [defaults]
            org = "example"
            go_version = "1.20"
        "#})
        .file(
            "test/go.mod.tmpl",
            "module github.com/{{.Org}}/{{.Name}}\n\ngo {{.GoVersion}}\n",
        )
        .build();
    let dir = tempdir().build();

    binary()
        .arg_new("test")
        .arg_name("acme")
        .arg_templates(templates.path())
        .arg_no_post_create()
        .arg("--go-version")
        .arg("1.22")
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        dir.read("acme/go.mod"),
        "module github.com/example/acme\n\ngo 1.22\n"
    );
}

#[test]
fn rendering_is_repeatable() {
    let templates = tempdir()
        .file(
            "cli/info.txt.tmpl",
            "{{- /* header */ -}}\n{{.Name}} by {{.Org}} ({{ .GoVersion }})\n",
        )
        .build();
    let dir = tempdir().build();

    for name in ["first", "second"] {
        binary()
            .arg_new("cli")
            .arg_name(name)
            .arg_templates(templates.path())
            .arg_no_post_create()
            .arg("--org")
            .arg("acme")
            .current_dir(dir.path())
            .assert()
            .success();
    }

    assert_eq!(dir.read("first/info.txt"), "first by acme (1.16)\n");
    assert_eq!(
        dir.read("second/info.txt"),
        dir.read("first/info.txt").replace("first", "second")
    );
}
