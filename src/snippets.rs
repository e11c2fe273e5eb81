//! The code-window playlist.
//!
//! Snippets are compile-time constants made of highlighted tokens. The
//! renderer turns every token into an escaped text node inside a
//! `<span>`, so no markup ever reaches `innerHTML`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Keyword,
    Function,
    Type,
    Str,
    Number,
    Comment,
}

impl TokenKind {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Keyword => Some("code-keyword"),
            Self::Function => Some("code-function"),
            Self::Type => Some("code-type"),
            Self::Str => Some("code-string"),
            Self::Number => Some("code-number"),
            Self::Comment => Some("code-comment"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub title: &'static str,
    pub code: &'static [Token],
}

impl Snippet {
    #[cfg(test)]
    pub fn char_count(&self) -> usize {
        self.code.iter().map(|token| token.text.chars().count()).sum()
    }

    pub fn char_at(&self, position: usize) -> Option<char> {
        self.code
            .iter()
            .flat_map(|token| token.text.chars())
            .nth(position)
    }

    /// The first `typed` characters, still split along token boundaries.
    pub fn visible(&self, typed: usize) -> Vec<Token> {
        let mut remaining = typed;
        let mut visible = Vec::new();

        for token in self.code {
            if remaining == 0 {
                break;
            }

            let end = token
                .text
                .char_indices()
                .nth(remaining)
                .map_or(token.text.len(), |(byte, _)| byte);
            let text = &token.text[..end];
            remaining -= text.chars().count();
            visible.push(Token {
                kind: token.kind,
                text,
            });
        }

        visible
    }
}

const fn plain(text: &'static str) -> Token {
    Token {
        kind: TokenKind::Plain,
        text,
    }
}

const fn kw(text: &'static str) -> Token {
    Token {
        kind: TokenKind::Keyword,
        text,
    }
}

const fn func(text: &'static str) -> Token {
    Token {
        kind: TokenKind::Function,
        text,
    }
}

const fn ty(text: &'static str) -> Token {
    Token {
        kind: TokenKind::Type,
        text,
    }
}

const fn string(text: &'static str) -> Token {
    Token {
        kind: TokenKind::Str,
        text,
    }
}

const fn num(text: &'static str) -> Token {
    Token {
        kind: TokenKind::Number,
        text,
    }
}

const fn comment(text: &'static str) -> Token {
    Token {
        kind: TokenKind::Comment,
        text,
    }
}

pub const PLAYLIST: &[Snippet] = &[
    Snippet {
        title: "developer.rs",
        code: &[
            kw("struct "),
            ty("Developer"),
            plain(" {\n    name: "),
            ty("String"),
            plain(",\n    stack: "),
            ty("Vec"),
            plain("<&"),
            kw("'static "),
            ty("str"),
            plain(">,\n}\n\n"),
            kw("impl "),
            ty("Developer"),
            plain(" {\n    "),
            kw("fn "),
            func("ship"),
            plain("(&"),
            kw("self"),
            plain(") -> "),
            ty("bool"),
            plain(" {\n        "),
            kw("true"),
            plain("\n    }\n}"),
        ],
    },
    Snippet {
        title: "model.py",
        code: &[
            kw("def "),
            func("train"),
            plain("(data, epochs="),
            num("10"),
            plain("):\n    "),
            comment("# fit, evaluate, repeat"),
            plain("\n    "),
            kw("for "),
            plain("epoch "),
            kw("in "),
            func("range"),
            plain("(epochs):\n        model."),
            func("fit"),
            plain("(data)\n    "),
            kw("return "),
            plain("model"),
        ],
    },
    Snippet {
        title: "contact.ts",
        code: &[
            kw("const "),
            plain("hello = "),
            kw("async "),
            plain("(name: "),
            ty("string"),
            plain(") => {\n  "),
            kw("return "),
            string("`Hi ${name}, let's build something!`"),
            plain(";\n};"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Snippet = Snippet {
        title: "sample",
        code: &[kw("let "), plain("x = "), num("42"), plain(";\n")],
    };

    fn text_of(tokens: &[Token]) -> String {
        tokens.iter().map(|token| token.text).collect()
    }

    #[test]
    fn visible_prefix_splits_inside_tokens() {
        let visible = SAMPLE.visible(6);

        assert_eq!(text_of(&visible), "let x ");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].kind, TokenKind::Keyword);
        assert_eq!(visible[1].text, "x ");
    }

    #[test]
    fn visible_prefix_is_clamped_to_snippet() {
        assert_eq!(text_of(&SAMPLE.visible(0)), "");
        assert_eq!(text_of(&SAMPLE.visible(500)), "let x = 42;\n");
    }

    #[test]
    fn char_lookup_counts_characters_not_bytes() {
        const WIDE: Snippet = Snippet {
            title: "wide",
            code: &[string("\"→\""), plain("\n")],
        };

        assert_eq!(WIDE.char_count(), 4);
        assert_eq!(WIDE.char_at(1), Some('→'));
        assert_eq!(WIDE.char_at(3), Some('\n'));
        assert_eq!(text_of(&WIDE.visible(2)), "\"→");
    }

    #[test]
    fn playlist_snippets_are_non_empty_and_titled() {
        assert!(PLAYLIST.len() > 1);
        for snippet in PLAYLIST {
            assert!(!snippet.title.is_empty());
            assert!(snippet.char_count() > 0);
        }
    }
}
