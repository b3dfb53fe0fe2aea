//! Syntax error rule.
//!
//! Reports every file whose extraction failed. Each failing file yields
//! exactly one issue because extraction stops at the first error.

use crate::{
    core::{ExtractFailure, FileExtraction},
    issues::{Issue, ReadErrorIssue, SourceContext, SyntaxErrorIssue},
};

pub fn check_syntax_issues(extractions: &[FileExtraction]) -> Vec<Issue> {
    extractions
        .iter()
        .filter_map(|file| match &file.outcome {
            Ok(_) => None,
            Err(ExtractFailure::Read(error)) => Some(Issue::ReadError(ReadErrorIssue {
                file_path: file.origin.clone(),
                error: format!("cannot read file: {error}"),
            })),
            Err(ExtractFailure::Syntax(error)) => Some(Issue::SyntaxError(SyntaxErrorIssue {
                context: SourceContext::locate(&file.origin, &file.source, error.offset()),
                error: error.clone(),
            })),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{Extraction, extract_strings};

    fn extraction(path: &str, source: &str) -> FileExtraction {
        FileExtraction {
            path: path.to_string(),
            origin: path.to_string(),
            source: source.to_string(),
            outcome: extract_strings(source).map_err(ExtractFailure::from),
        }
    }

    #[test]
    fn test_clean_files_have_no_issues() {
        let files = vec![extraction("a.html", r#"{{ _("hi") }}"#)];
        assert!(check_syntax_issues(&files).is_empty());
    }

    #[test]
    fn test_syntax_error_position() {
        let files = vec![extraction("a.html", "<p>ok</p>\n  {% if x ")];
        let issues = check_syntax_issues(&files);

        assert_eq!(issues.len(), 1);
        let Issue::SyntaxError(issue) = &issues[0] else {
            panic!("expected syntax error, got {:?}", issues[0]);
        };
        assert_eq!(issue.context.line, 2);
        assert_eq!(issue.context.col, 3);
        assert_eq!(issue.context.source_line, "  {% if x ");
    }

    #[test]
    fn test_read_error() {
        let files = vec![FileExtraction {
            path: "gone.html".to_string(),
            origin: "gone.html".to_string(),
            source: String::new(),
            outcome: Err(ExtractFailure::Read("No such file".to_string())),
        }];
        let issues = check_syntax_issues(&files);
        assert_eq!(
            issues,
            vec![Issue::ReadError(ReadErrorIssue {
                file_path: "gone.html".to_string(),
                error: "cannot read file: No such file".to_string(),
            })]
        );
    }

    #[test]
    fn test_issues_are_labelled_by_origin() {
        let broken = FileExtraction {
            path: "./site/a.html".to_string(),
            origin: "a.html".to_string(),
            ..extraction("a.html", "\n{{ x")
        };
        let unreadable = FileExtraction {
            path: "./site/b.html".to_string(),
            origin: "b.html".to_string(),
            source: String::new(),
            outcome: Err(ExtractFailure::Read("denied".to_string())),
        };
        let issues = check_syntax_issues(&[broken, unreadable]);

        assert_eq!(issues.len(), 2);
        let Issue::SyntaxError(syntax) = &issues[0] else {
            panic!("expected syntax error, got {:?}", issues[0]);
        };
        assert_eq!(syntax.context.file_path(), "a.html");
        assert_eq!(syntax.context.line, 2);
        let Issue::ReadError(read) = &issues[1] else {
            panic!("expected read error, got {:?}", issues[1]);
        };
        assert_eq!(read.file_path, "b.html");
    }

    #[test]
    fn test_only_failing_files_reported() {
        let files = vec![
            extraction("a.html", "{{ x }}"),
            FileExtraction {
                outcome: Ok(Extraction::default()),
                ..extraction("b.html", "")
            },
            extraction("c.html", "{{ _('x\") }}"),
        ];
        let issues = check_syntax_issues(&files);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].rule(),
            crate::issues::Rule::UnparsableExpression
        );
    }
}
