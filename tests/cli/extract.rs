use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_extract_gettext() -> Result<()> {
    let test = CliTest::with_file(
        "templates/home.html",
        r#"<h1>{{ _("Welcome")|upper }}</h1>
{% i18nc "greeting" "Hello %1" user.name %}
{% i18np "%1 message" "%1 messages" count %}
"#,
    )?;

    let result = run(&mut test.extract_command())?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        r#"// i18n: file: templates/home.html
gettext("Welcome");
// i18n: file: templates/home.html
pgettext("greeting", "Hello %1");
// i18n: file: templates/home.html
ngettext("%1 message", "%1 messages");
"#
    );
    assert_eq!(result.stderr, "");

    Ok(())
}

#[test]
fn test_extract_linguist() -> Result<()> {
    let test = CliTest::with_file(
        "mail.txt",
        r#"{% i18ncp "inbox" "%n mail" "%n mails" n %}{{ list|join:_(", ") }}"#,
    )?;

    let result = run(test.extract_command().args(["--format", "linguist"]))?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        r#"QCoreApplication::translate("mail.txt", ", ");
QCoreApplication::translate("mail.txt", "%n mail", "inbox", count);
"#
    );

    Ok(())
}

#[test]
fn test_extract_files_in_path_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("b.html", r#"{{ _("second") }}"#)?;
    test.write_file("a.html", r#"{{ _("first") }}"#)?;
    test.write_file("script.js", r#"_("ignored")"#)?;

    let result = run(test.extract_command().arg("--no-origin-comments"))?;

    assert_eq!(result.stdout, "gettext(\"first\");\ngettext(\"second\");\n");

    Ok(())
}

#[test]
fn test_extract_reports_broken_template() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.html", r#"{{ _("ok") }}"#)?;
    test.write_file("b.html", "<p>\n{% if x")?;
    test.write_file("c.html", r#"{{ _("after") }}"#)?;

    let result = run(test.extract_command().arg("--no-origin-comments"))?;

    assert_eq!(result.code, Some(1));
    assert_eq!(result.stdout, "gettext(\"ok\");\ngettext(\"after\");\n");
    assert!(result.stderr.contains("error: unterminated block tag"));
    assert!(result.stderr.contains("--> b.html:2:1"));

    Ok(())
}

#[test]
fn test_extract_fail_fast() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.html", r#"{{ _("ok") }}"#)?;
    test.write_file("b.html", r#"{{ _("broken') }}"#)?;
    test.write_file("c.html", r#"{{ _("after") }}"#)?;

    let result = run(test
        .extract_command()
        .args(["--no-origin-comments", "--fail-fast"]))?;

    assert_eq!(result.code, Some(1));
    assert_eq!(result.stdout, "gettext(\"ok\");\n");
    assert!(result.stderr.contains("unparsable-expression"));
    assert!(result.stderr.contains("stopped at the first failing template"));

    Ok(())
}

#[test]
fn test_extract_malformed_tag_is_warning() -> Result<()> {
    let test = CliTest::with_file("a.html", r#"{% i18n greeting %}{{ _("kept") }}"#)?;

    let result = run(test.extract_command().arg("--no-origin-comments"))?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "gettext(\"kept\");\n");
    assert!(result.stderr.contains("warning: `i18n` tag skipped"));
    assert!(result.stderr.contains("malformed-i18n-tag"));

    Ok(())
}

#[test]
fn test_extract_to_output_file() -> Result<()> {
    let test = CliTest::with_file("a.html", r#"{{ _("hi") }}"#)?;

    let result = run(test.extract_command().args(["-o", "catalog.cpp"]))?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "");
    assert!(result.stderr.contains("Wrote 1 string from 1 template to catalog.cpp"));
    assert_eq!(
        test.read_file("catalog.cpp")?,
        "// i18n: file: a.html\ngettext(\"hi\");\n"
    );

    Ok(())
}

#[test]
fn test_extract_explicit_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.html", r#"{{ _("a") }}"#)?;
    test.write_file("notes.md", r#"{{ _("b") }}"#)?;

    let result = run(test
        .extract_command()
        .args(["--no-origin-comments", "notes.md"]))?;

    assert_eq!(result.stdout, "gettext(\"b\");\n");

    Ok(())
}

#[test]
fn test_extract_uses_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tplxrc.json",
        r#"{
          "ignores": ["vendor"],
          "format": "linguist"
      }"#,
    )?;
    test.write_file("vendor/lib.html", r#"{{ _("vendored") }}"#)?;
    test.write_file("page.html", r#"{{ _("page") }}"#)?;

    let result = run(&mut test.extract_command())?;

    assert_eq!(
        result.stdout,
        "QCoreApplication::translate(\"page.html\", \"page\");\n"
    );

    Ok(())
}

#[test]
fn test_extract_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".tplxrc.json", r#"{ "extensions": [] }"#)?;

    let result = run(&mut test.extract_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.starts_with("Error: "));

    Ok(())
}

#[test]
fn test_extract_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/templates/a.html", r#"{{ _("x") }}"#)?;

    let result = run(test.extract_command().args(["--source-root", "site"]))?;

    assert_eq!(
        result.stdout,
        "// i18n: file: templates/a.html\ngettext(\"x\");\n"
    );

    Ok(())
}
