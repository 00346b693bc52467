use anyhow::Result;

use crate::{CliTest, run};

const TREE_SOURCE: &str = r#"class Decoration {}
class Device {}
const AutoExpand = Symbol("expand");
let dev: Device;
const dec = new Decoration();
const item = new TreeItem(AutoExpand, dec, dev);
"#;

#[test]
fn test_fix_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::with_file("src/tree.ts", TREE_SOURCE)?;

    let (code, stdout, _) = run(&mut test.fix_command());
    assert_eq!(code, Some(0));
    assert!(
        stdout.contains("Would rewrite 3 argument(s) in 1 file(s)"),
        "expected dry-run summary, got:\n{}",
        stdout
    );
    assert!(stdout.contains("--apply"));
    assert_eq!(test.read_file("src/tree.ts")?, TREE_SOURCE);
    Ok(())
}

#[test]
fn test_fix_apply_rewrites_arguments() -> Result<()> {
    let test = CliTest::with_file("src/tree.ts", TREE_SOURCE)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(&mut cmd);
    assert_eq!(code, Some(0));
    assert!(
        stdout.contains("Rewrote 3 argument(s) in 1 file(s)"),
        "expected apply summary, got:\n{}",
        stdout
    );

    let content = test.read_file("src/tree.ts")?;
    assert!(
        content.contains(
            "new TreeItem().set_default_expanded().set_decoration(dec).add_device(dev);"
        ),
        "unexpected rewrite:\n{}",
        content
    );
    Ok(())
}

#[test]
fn test_fix_apply_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("src/tree.ts", TREE_SOURCE)?;

    let mut first = test.fix_command();
    first.arg("--apply");
    run(&mut first);
    let after_first = test.read_file("src/tree.ts")?;

    let mut second = test.fix_command();
    second.arg("--apply");
    let (code, stdout, _) = run(&mut second);
    assert_eq!(code, Some(0));
    assert!(
        stdout.contains("nothing left to migrate"),
        "expected clean second run, got:\n{}",
        stdout
    );
    assert_eq!(test.read_file("src/tree.ts")?, after_first);
    Ok(())
}

#[test]
fn test_fix_apply_rewrites_every_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/a.ts",
        "class Device {}\nlet dev: Device;\nconst a = new TreeItem(dev);\n",
    )?;
    test.write_file(
        "src/b.ts",
        "class Connection {}\nlet links: Connection[];\nconst b = new TreeItem(\"x\", links);\n",
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(&mut cmd);
    assert_eq!(code, Some(0));
    assert!(
        stdout.contains("Rewrote 2 argument(s) in 2 file(s)"),
        "expected summary, got:\n{}",
        stdout
    );

    assert!(
        test.read_file("src/a.ts")?
            .contains("new TreeItem().add_device(dev);")
    );
    assert!(
        test.read_file("src/b.ts")?
            .contains("new TreeItem(\"x\").add_connection(links);")
    );
    Ok(())
}

#[test]
fn test_fix_preserves_complex_argument_text() -> Result<()> {
    let test = CliTest::with_file(
        "src/tree.ts",
        r#"class Decoration {}
function pick(kind: string, weight: number): Decoration { return new Decoration(); }
const item = new TreeItem("node", pick("bold", 1 + 2));
"#,
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    run(&mut cmd);

    let content = test.read_file("src/tree.ts")?;
    assert!(
        content.contains(r#"new TreeItem("node").set_decoration(pick("bold", 1 + 2));"#),
        "argument text must survive byte-for-byte:\n{}",
        content
    );
    Ok(())
}
