mod example_document;

use std::{fmt::Write, fs, path::Path};

use example_document::ExampleDocument;
use htmldiff_text::{Action, HtmlDiff, Token, html_diff};
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[test]
fn test_documents_render_expected_html() {
    for doc in &get_all_documents() {
        doc.assert_eq(&html_diff(doc.old_html(), doc.new_html()));
    }
}

#[test]
fn test_documents_inverse_way_without_panic() {
    for doc in &get_all_documents() {
        let diff = HtmlDiff::from_strings(doc.new_html(), doc.old_html());
        assert_covers(&diff, doc.name());
        let _ = diff.to_html();
    }
}

#[test]
fn test_operations_cover_both_documents() {
    for doc in &get_all_documents() {
        assert_covers(&HtmlDiff::from_strings(doc.old_html(), doc.new_html()), doc.name());
    }
}

#[test]
fn test_documents_can_be_reconstructed() {
    for doc in &get_all_documents() {
        let diff = HtmlDiff::from_strings(doc.old_html(), doc.new_html());
        let (old, new) = reconstruct(&diff);

        assert_eq!(old, doc.old_html(), "old side of `{}`", doc.name());
        assert_eq!(new, doc.new_html(), "new side of `{}`", doc.name());
    }
}

#[test]
fn test_diff_with_itself_is_identity() {
    for doc in &get_all_documents() {
        for html in [doc.old_html(), doc.new_html()] {
            let diff = HtmlDiff::from_strings(html, html);

            assert_eq!(diff.operations().len(), 1, "`{}`", doc.name());
            assert_eq!(diff.operations()[0].action, Action::Equal);
            assert_eq!(diff.to_html(), html);
        }
    }
}

#[test]
fn test_matching_blocks_are_ordered() {
    for doc in &get_all_documents() {
        let diff = HtmlDiff::from_strings(doc.old_html(), doc.new_html());
        for pair in diff.matching_blocks().windows(2) {
            assert!(pair[0].end_in_old() <= pair[1].start_in_old);
            assert!(pair[0].end_in_new() <= pair[1].start_in_new);
        }
        for block in diff.matching_blocks() {
            assert!(block.size > 0);
            assert_eq!(
                &diff.old_tokens()[block.old_range()],
                &diff.new_tokens()[block.new_range()]
            );
        }
    }
}

#[test]
fn test_long_document() {
    let mut old = String::new();
    let mut new = String::new();
    for i in 0..200 {
        writeln!(old, "<p>Paragraph {i} has <b>some</b> text.</p>").unwrap();
        if i % 10 == 0 {
            writeln!(new, "<p>Paragraph {i} has <i>other</i> words!</p>").unwrap();
        } else if i % 25 != 0 {
            writeln!(new, "<p>Paragraph {i} has <b>some</b> text.</p>").unwrap();
        }
    }

    let diff = HtmlDiff::from_strings(&old, &new);
    assert_covers(&diff, "long document");

    let (reconstructed_old, reconstructed_new) = reconstruct(&diff);
    assert_eq!(reconstructed_old, old);
    assert_eq!(reconstructed_new, new);

    let html = diff.to_html();
    assert!(html.contains("<p>Paragraph 1 has <b>some</b> text.</p>"));
    assert!(html.contains("diffmod"));
}

fn assert_covers(diff: &HtmlDiff, name: &str) {
    let mut position_in_old = 0;
    let mut position_in_new = 0;

    for operation in diff.operations() {
        assert_eq!(operation.start_in_old, position_in_old, "`{name}`");
        assert_eq!(operation.start_in_new, position_in_new, "`{name}`");

        match operation.action {
            Action::Equal => assert_eq!(operation.old_range().len(), operation.new_range().len()),
            Action::Insert => assert!(operation.old_range().is_empty()),
            Action::Delete => assert!(operation.new_range().is_empty()),
            Action::Replace => {
                assert!(!operation.old_range().is_empty());
                assert!(!operation.new_range().is_empty());
            }
            Action::None => panic!("`{name}` contains a no-op operation"),
        }

        position_in_old = operation.end_in_old;
        position_in_new = operation.end_in_new;
    }

    assert_eq!(position_in_old, diff.old_tokens().len(), "`{name}`");
    assert_eq!(position_in_new, diff.new_tokens().len(), "`{name}`");
}

/// Rebuild the old document from the equal and removed regions, and the new
/// one from the equal and added regions.
fn reconstruct(diff: &HtmlDiff) -> (String, String) {
    let mut old = String::new();
    let mut new = String::new();

    for operation in diff.operations() {
        if operation.action != Action::Insert {
            old.extend(diff.old_tokens()[operation.old_range()].iter().map(Token::original));
        }
        if operation.action != Action::Delete {
            new.extend(diff.new_tokens()[operation.new_range()].iter().map(Token::original));
        }
    }

    (old, new)
}

fn get_all_documents() -> Vec<ExampleDocument> {
    let examples_dir = Path::new("tests/examples");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut documents = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open example file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let doc =
                    ExampleDocument::deserialize(document).expect("Failed to deserialize document");
                documents.push(doc);
            }
        }
    }

    assert!(!documents.is_empty(), "No example documents found");

    documents
}
