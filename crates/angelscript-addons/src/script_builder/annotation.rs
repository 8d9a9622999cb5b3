use angelscript_core::{TokenClass, TokenClassifier};

use super::cursor::{Cursor, blank};

/// Result of reading one `[...]` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Annotation {
    /// Text between the outermost brackets.
    pub metadata: String,
    /// Offset just past the closing bracket, or the end of the text.
    pub end: usize,
    /// False when the text ran out before the brackets balanced.
    pub closed: bool,
}

/// Read the annotation whose `[` sits at `open`, blanking it in `output`.
///
/// Nested brackets are tracked with a depth counter. Only punctuation tokens
/// count, so brackets inside strings or comments don't. Whitespace tokens are
/// left as they are; every other consumed token is overwritten with spaces.
/// An unbalanced annotation swallows the rest of the text.
pub(crate) fn extract_annotation<C: TokenClassifier + ?Sized>(
    classifier: &C,
    source: &str,
    output: &mut [u8],
    open: usize,
) -> Annotation {
    blank(output, open..open + 1);

    let mut cursor = Cursor::new(classifier, source, open + 1);
    let mut depth = 1usize;
    let mut metadata = String::new();

    while depth > 0 {
        let Some(token) = cursor.bump() else {
            break;
        };

        if token.is_punct(b'[') {
            depth += 1;
        } else if token.is_punct(b']') {
            depth -= 1;
        }

        if depth > 0 {
            metadata.push_str(token.text);
        }

        if token.class != TokenClass::Whitespace {
            blank(output, token.range());
        }
    }

    Annotation {
        metadata,
        end: cursor.pos(),
        closed: depth == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angelscript_lexer::Tokenizer;
    use pretty_assertions::assert_eq;

    fn extract(source: &str) -> (Annotation, String) {
        let mut output = source.as_bytes().to_vec();
        let open = source.find('[').unwrap();
        let annotation = extract_annotation(&Tokenizer::new(), source, &mut output, open);
        (annotation, String::from_utf8(output).unwrap())
    }

    #[test]
    fn simple_annotation() {
        let (annotation, output) = extract("[Tag] class Foo {}");

        assert_eq!(annotation.metadata, "Tag");
        assert_eq!(annotation.end, 5);
        assert!(annotation.closed);
        assert_eq!(output, "      class Foo {}");
    }

    #[test]
    fn nested_brackets_are_kept_in_payload() {
        let (annotation, output) = extract("[list[1], other] int x;");

        assert_eq!(annotation.metadata, "list[1], other");
        assert_eq!(output, " ".repeat(16) + " int x;");
    }

    #[test]
    fn whitespace_inside_is_untouched() {
        let (annotation, output) = extract("[a\tb\nc]\nint x;");

        assert_eq!(annotation.metadata, "a\tb\nc");
        assert_eq!(output, "  \t \n  \nint x;");
    }

    #[test]
    fn brackets_in_strings_do_not_count() {
        let (annotation, _) = extract("[name=\"]\"] int x;");

        assert_eq!(annotation.metadata, "name=\"]\"");
        assert!(annotation.closed);
    }

    #[test]
    fn unbalanced_annotation_consumes_rest() {
        let source = "[open int x;";
        let (annotation, output) = extract(source);

        assert!(!annotation.closed);
        assert_eq!(annotation.end, source.len());
        assert_eq!(annotation.metadata, "open int x;");
        assert_eq!(output.len(), source.len());
        assert!(output.bytes().all(|b| b == b' '));
    }

    #[test]
    fn comments_keep_their_newlines() {
        let (annotation, output) = extract("[a /* x\ny */] int v;");

        assert_eq!(annotation.metadata, "a /* x\ny */");
        assert_eq!(output, "       \n      int v;");
    }
}
