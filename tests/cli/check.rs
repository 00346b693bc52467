use anyhow::Result;

use crate::{CliTest, run};

const TREE_SOURCE: &str = r#"class Device {}
const AutoExpand = Symbol("expand");
let dev: Device;
const item = new TreeItem("node", AutoExpand, dev);
"#;

#[test]
fn test_check_reports_migratable_arguments() -> Result<()> {
    let test = CliTest::with_file("src/tree.ts", TREE_SOURCE)?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, Some(1));
    assert!(
        stdout.contains("expand-flag"),
        "expected expand-flag diagnostic, got:\n{}",
        stdout
    );
    assert!(stdout.contains("device"));
    assert!(stdout.contains("src/tree.ts"));
    assert!(stdout.contains(".add_device(dev)"));
    Ok(())
}

#[test]
fn test_check_clean_project_exits_zero() -> Result<()> {
    let test = CliTest::with_file(
        "src/tree.ts",
        "const item = new TreeItem(\"node\");\n",
    )?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, Some(0));
    assert!(
        stdout.contains("nothing left to migrate"),
        "expected success message, got:\n{}",
        stdout
    );
    Ok(())
}

#[test]
fn test_check_does_not_modify_files() -> Result<()> {
    let test = CliTest::with_file("src/tree.ts", TREE_SOURCE)?;

    run(&mut test.check_command());
    assert_eq!(test.read_file("src/tree.ts")?, TREE_SOURCE);
    Ok(())
}

#[test]
fn test_check_reports_parse_errors() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "const = ;\n")?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, Some(1));
    assert!(
        stdout.contains("parse-error"),
        "expected parse-error diagnostic, got:\n{}",
        stdout
    );
    Ok(())
}

#[test]
fn test_check_honors_configured_constructor_name() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".builderizerc.json",
        r#"{ "constructorName": "ListEntry" }"#,
    )?;
    test.write_file(
        "src/list.ts",
        r#"class Device {}
let dev: Device;
const entry = new ListEntry("node", dev);
const item = new TreeItem("node", dev);
"#,
    )?;

    let (code, stdout, _) = run(&mut test.check_command());
    assert_eq!(code, Some(1));
    // Only the configured constructor is migrated.
    assert!(stdout.contains("1 migratable argument(s)"), "{}", stdout);
    Ok(())
}

#[test]
fn test_check_honors_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".builderizerc.json", r#"{ "ignores": ["**/vendor/**"] }"#)?;
    test.write_file("vendor/tree.ts", TREE_SOURCE)?;

    let (code, _, _) = run(&mut test.check_command());
    assert_eq!(code, Some(0));
    Ok(())
}
