use std::fs;

use reckon::{
    Diagnostic, ExpressionNode, ReckonError, RuntimeError, evaluate, get_result, parse,
    interpreter::token::TokenKind,
    repl::Session,
    tokenize,
    util::tree::render_tree,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_transcripts(&content).into_iter().enumerate() {
            let mut session = Session::default();
            for (input, expected) in block {
                count += 1;
                let actual = session.handle(&input).to_string();
                assert_eq!(actual,
                           expected,
                           "Transcript {} in {:?} diverged on input {:?}",
                           i + 1,
                           path,
                           input);
            }
        }
    }

    assert!(count > 0, "No transcripts found in book/src");
}

/// Splits every ```` ```reckon ```` block into `(input, expected output)`
/// pairs. Input lines start with `> `; the lines up to the next input are the
/// expected output.
fn extract_transcripts(content: &str) -> Vec<Vec<(String, String)>> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut block: Vec<(String, Vec<&str>)> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            block.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(block.drain(..)
                             .map(|(input, output)| (input, output.join("\n")))
                             .collect());
            continue;
        }
        if inside {
            if let Some(input) = line.strip_prefix("> ") {
                block.push((input.to_string(), Vec::new()));
            } else if let Some((_, output)) = block.last_mut() {
                output.push(line);
            }
        }
    }

    blocks
}

fn messages(text: &str) -> Vec<String> {
    parse(text).diagnostics.iter().map(ToString::to_string).collect()
}

#[test]
fn digit_strings_tokenize_to_their_value() {
    for value in [0, 1, 9, 10, 42, 65_535, 1_000_000, i32::MAX] {
        let text = value.to_string();
        let (tokens, diagnostics) = tokenize(&text);

        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].value, Some(value));
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }
}

#[test]
fn well_formed_expressions() {
    let cases = [("42", 42),
                 ("1 + 2 * 3", 7),
                 ("(1 + 2) * 3", 9),
                 ("1-2-3", -4),
                 ("10/2/5", 1),
                 ("8 / 3 * 3", 6),
                 ("8 - (3 - 1)", 6),
                 ("((((5))))", 5),
                 ("2 * 3 + 4 * 5 - 6 / 2", 23),
                 ("\t100 /  7 ", 14)];

    for (text, expected) in cases {
        assert_eq!(get_result(text), Ok(expected), "evaluating {text:?}");
    }
}

#[test]
fn unterminated_parenthesis_is_soft() {
    let tree = parse("(1+2");

    assert!(!tree.diagnostics.is_empty());
    assert!(tree.diagnostics
                .iter()
                .any(|d| d.message.contains("expected <CloseParen>")));
}

#[test]
fn bad_character_is_elided() {
    let with_bad = parse("1+@2");
    let clean = parse("1+2");

    assert_eq!(messages("1+@2"), ["Bad character '@' at position 2."]);
    assert_eq!(render_tree(&with_bad.root), render_tree(&clean.root));
    assert_eq!(evaluate(&with_bad.root), Ok(3));
}

#[test]
fn every_problem_is_reported_in_order() {
    assert_eq!(messages("(9999999999 ~ 1"),
               ["The value 9999999999 at position 1 is not a valid integer.",
                "Bad character '~' at position 12.",
                "Unexpected token <Number> at position 14, expected <CloseParen>.",
                "Unexpected token <Number> at position 14, expected <EOF>."]);
}

#[test]
fn trailing_token_is_reported_against_eof() {
    let tree = parse("2 * 3)");

    assert_eq!(tree.diagnostics,
               [Diagnostic::unexpected_token(TokenKind::CloseParen, TokenKind::Eof, 5)]);
    assert!(tree.eof_token.is_placeholder());
    assert!(matches!(tree.root, ExpressionNode::Binary { .. }));
}

#[test]
fn division_by_zero_is_a_hard_failure() {
    let tree = parse("4/0");

    assert!(tree.diagnostics.is_empty());
    assert_eq!(evaluate(&tree.root), Err(RuntimeError::DivisionByZero { position: 1 }));
    assert_eq!(get_result("4/0"),
               Err(ReckonError::Runtime(RuntimeError::DivisionByZero { position: 1 })));
}

#[test]
fn tokenizing_is_pure() {
    for text in ["", "1 + 2", "(3 ! 4", "55555555555 / ("] {
        assert_eq!(tokenize(text), tokenize(text));
    }
}
