use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("init"))?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "\u{2713} Created .tplxrc.json\n");

    let content = test.read_file(".tplxrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["format"], "gettext");
    assert_eq!(parsed["originComments"], true);
    assert_eq!(
        parsed["extensions"],
        serde_json::json!(["html", "htm", "txt", "tpl"])
    );
    assert!(test.root().join(".tplxrc.json").exists());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tplxrc.json", "{}")?;

    let result = run(test.command().arg("init"))?;

    assert_eq!(result.code, Some(2));
    assert_eq!(result.stderr, "Error: .tplxrc.json already exists\n");
    assert_eq!(test.read_file(".tplxrc.json")?, "{}");

    Ok(())
}
