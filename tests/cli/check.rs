use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_clean_templates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.html", r#"{% i18n "Hello %1" name %}"#)?;
    test.write_file("b.html", r#"{% if x == "y" %}{{ _("z") }}{% endif %}"#)?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "\u{2713} Checked 2 template files - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_syntax_error() -> Result<()> {
    let test = CliTest::with_file("page.html", "<ul>\n  <li>{{ _(\"item\" }}</li>\n</ul>\n")?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("error: cannot parse filter expression"));
    assert!(result.stdout.contains("--> page.html:2:"));
    assert!(result.stdout.contains("2 |   <li>{{ _(\"item\" }}</li>"));
    assert!(result.stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::with_file("a.html", r#"{% i18nc "ctx" %}"#)?;

    let result = run(&mut test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("warning: `i18nc` tag skipped: missing message argument"));
    assert!(result.stdout.contains("1 problems (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Usage:"));

    Ok(())
}
