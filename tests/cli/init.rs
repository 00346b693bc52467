use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(&mut test.init_command());
    assert_eq!(code, Some(0));
    assert!(stdout.contains(".builderizerc.json"));

    let content = test.read_file(".builderizerc.json")?;
    assert!(content.contains("\"constructorName\": \"TreeItem\""));
    assert!(content.contains("\"expandFlagSymbol\": \"AutoExpand\""));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".builderizerc.json", "{}")?;

    let (code, _, stderr) = run(&mut test.init_command());
    assert_eq!(code, Some(2));
    assert!(stderr.contains("already exists"));
    Ok(())
}
