use angelscript_core::{TokenClass, TokenClassifier};

use super::cursor::Cursor;
use super::metadata::DeclarationKind;

/// A declaration recognised after an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Declaration {
    pub signature: String,
    pub kind: DeclarationKind,
    /// Where scanning resumes: after the type name, or at the `{`, `=` or `;`
    /// that ended the declaration.
    pub end: usize,
}

impl Declaration {
    fn new(mut signature: String, kind: DeclarationKind, end: usize) -> Self {
        signature.truncate(signature.trim_end().len());
        Self {
            signature,
            kind,
            end,
        }
    }
}

/// Work out what the declaration starting at `pos` is.
///
/// `class Name` and `interface Name` are types. Anything else is read token by
/// token until a `{` (function) or a `=`/`;` (variable). Variables drop
/// everything from the first `(` on, so `MyType obj(1, 2);` gives `MyType obj`.
/// Returns `None` if the text ends first.
pub(crate) fn classify_declaration<C: TokenClassifier + ?Sized>(
    classifier: &C,
    source: &str,
    pos: usize,
) -> Option<Declaration> {
    let mut cursor = Cursor::new(classifier, source, pos);
    cursor.skip_trivia();

    let first = cursor.peek()?;
    if matches!(first.class, TokenClass::Keyword | TokenClass::Identifier)
        && matches!(first.text, "class" | "interface")
    {
        cursor.advance(first);
        cursor.skip_trivia();
        let name = cursor.eat(TokenClass::Identifier)?;
        return Some(Declaration::new(
            name.text.to_string(),
            DeclarationKind::Type,
            cursor.pos(),
        ));
    }

    let mut signature = String::new();
    let mut mark = None;

    while let Some(token) = cursor.peek() {
        if token.class == TokenClass::Keyword {
            match token.text {
                "{" => {
                    return Some(Declaration::new(
                        signature,
                        DeclarationKind::Function,
                        token.start,
                    ));
                }
                "=" | ";" => {
                    if let Some(mark) = mark {
                        signature.truncate(mark);
                    }
                    return Some(Declaration::new(
                        signature,
                        DeclarationKind::Variable,
                        token.start,
                    ));
                }
                "(" if mark.is_none() => mark = Some(signature.len()),
                _ => {}
            }
        }

        signature.push_str(token.text);
        cursor.advance(token);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use angelscript_core::ClassifiedToken;
    use angelscript_lexer::Tokenizer;
    use pretty_assertions::assert_eq;

    fn classify(source: &str) -> Option<(DeclarationKind, String)> {
        classify_declaration(&Tokenizer::new(), source, 0).map(|d| (d.kind, d.signature))
    }

    #[test]
    fn class_is_type() {
        assert_eq!(
            classify(" class Foo { int x; }"),
            Some((DeclarationKind::Type, "Foo".to_string()))
        );
    }

    #[test]
    fn interface_is_type() {
        assert_eq!(
            classify("\n// doc\ninterface /* c */ IShape {}"),
            Some((DeclarationKind::Type, "IShape".to_string()))
        );
    }

    /// Reports `class` and `interface` as plain identifiers.
    struct ContextualKeywords(Tokenizer);

    impl TokenClassifier for ContextualKeywords {
        fn classify(&self, source: &str) -> ClassifiedToken {
            let token = self.0.classify(source);
            match source.get(..token.len) {
                Some("class" | "interface") => {
                    ClassifiedToken::new(TokenClass::Identifier, token.len)
                }
                _ => token,
            }
        }
    }

    #[test]
    fn type_keywords_classified_as_identifiers() {
        let classifier = ContextualKeywords(Tokenizer::new());
        for (source, name) in [(" class Foo {}", "Foo"), ("interface IShape {}", "IShape")] {
            let decl = classify_declaration(&classifier, source, 0).unwrap();
            assert_eq!(decl.kind, DeclarationKind::Type);
            assert_eq!(decl.signature, name);
        }
    }

    #[test]
    fn type_declaration_ends_after_name() {
        let source = " class Foo : Base {}";
        let decl = classify_declaration(&Tokenizer::new(), source, 0).unwrap();
        assert_eq!(&source[decl.end..], " : Base {}");
    }

    #[test]
    fn function_stops_at_brace() {
        let source = " int bar(int x) { return x; }";
        let decl = classify_declaration(&Tokenizer::new(), source, 0).unwrap();

        assert_eq!(decl.kind, DeclarationKind::Function);
        assert_eq!(decl.signature, "int bar(int x)");
        assert_eq!(&source[decl.end..decl.end + 1], "{");
    }

    #[test]
    fn variable_with_initializer() {
        assert_eq!(
            classify(" int count = 5;"),
            Some((DeclarationKind::Variable, "int count".to_string()))
        );
    }

    #[test]
    fn variable_without_initializer() {
        assert_eq!(
            classify("float speed;"),
            Some((DeclarationKind::Variable, "float speed".to_string()))
        );
    }

    #[test]
    fn constructor_style_variable_is_truncated() {
        assert_eq!(
            classify(" MyType obj(1,2);"),
            Some((DeclarationKind::Variable, "MyType obj".to_string()))
        );
    }

    #[test]
    fn only_first_paren_marks() {
        assert_eq!(
            classify(" Obj o(make(1), (2));"),
            Some((DeclarationKind::Variable, "Obj o".to_string()))
        );
    }

    #[test]
    fn comments_inside_signature_are_kept() {
        assert_eq!(
            classify(" void /* hook */ run() {}"),
            Some((DeclarationKind::Function, "void /* hook */ run()".to_string()))
        );
    }

    #[test]
    fn operators_that_contain_equals_do_not_end_variables() {
        assert_eq!(
            classify(" bool ok = a == b;"),
            Some((DeclarationKind::Variable, "bool ok".to_string()))
        );
        assert_eq!(
            classify(" void f(int a) const {}"),
            Some((DeclarationKind::Function, "void f(int a) const".to_string()))
        );
    }

    #[test]
    fn no_terminator_fails() {
        assert_eq!(classify(" int dangling"), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn class_without_name_fails() {
        assert_eq!(classify(" class {"), None);
    }
}
