//! Raw command-line directive parsing (`-e <file>`, `-c <file>`, `-g <project>`).
use std::collections::{btree_map, BTreeMap};

/// Single-letter directives and their arguments. A repeated directive keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveMap {
    entries: BTreeMap<char, String>,
}

impl DirectiveMap {
    pub fn get(&self, key: char) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn insert(&mut self, key: char, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DirectiveMap {
    type Item = (&'a char, &'a String);
    type IntoIter = btree_map::Iter<'a, char, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug)]
struct Token {
    text: String,
    /// Opened with a quote; never read as a directive.
    quoted: bool,
}

/// Parse a raw command line into directives. Never fails: tokens that are not
/// `-<letter> <value>` or `-<letter>=<value>` are dropped.
pub fn parse_directives(raw: &str) -> DirectiveMap {
    let tokens = tokenize(raw);
    let mut directives = DirectiveMap::default();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];
        index += 1;
        if token.quoted {
            continue;
        }
        let Some((key, inline)) = directive_key(&token.text) else {
            continue;
        };

        if let Some(value) = inline {
            if !value.is_empty() {
                directives.insert(key, value);
            }
            continue;
        }

        match tokens.get(index) {
            Some(next) if next.quoted || directive_key(&next.text).is_none() => {
                directives.insert(key, next.text.clone());
                index += 1;
            }
            _ => {}
        }
    }

    directives
}

/// Re-join process arguments into one raw command line, quoting any that contain
/// whitespace or are empty.
pub fn to_raw_command_line<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.as_ref();
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                format!("\"{arg}\"")
            } else {
                arg.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `-e` → `('e', None)`, `-e=path` → `('e', Some("path"))`.
fn directive_key(text: &str) -> Option<(char, Option<&str>)> {
    let rest = text.strip_prefix('-')?;
    let mut chars = rest.chars();
    let key = chars.next().filter(char::is_ascii_alphabetic)?;
    let tail = chars.as_str();
    if tail.is_empty() {
        return Some((key, None));
    }
    tail.strip_prefix('=').map(|value| (key, Some(value)))
}

fn tokenize(raw: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut quoted = false;

    for c in raw.chars() {
        match c {
            '"' => {
                if !in_token {
                    quoted = true;
                }
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                    in_token = false;
                    quoted = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(Token {
            text: current,
            quoted,
        });
    }
    tokens
}
