/// Container-level rule turning Rust field names into tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    CamelCase,
    PascalCase,
    SnakeCase,
    KebabCase,
    ScreamingSnakeCase,
    Lowercase,
    Uppercase,
}

impl RenameRule {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "camelCase" => Some(RenameRule::CamelCase),
            "PascalCase" => Some(RenameRule::PascalCase),
            "snake_case" => Some(RenameRule::SnakeCase),
            "kebab-case" => Some(RenameRule::KebabCase),
            "SCREAMING_SNAKE_CASE" => Some(RenameRule::ScreamingSnakeCase),
            "lowercase" => Some(RenameRule::Lowercase),
            "UPPERCASE" => Some(RenameRule::Uppercase),
            _ => None,
        }
    }

    pub fn apply(self, name: &str) -> String {
        let words = split_into_words(name);
        match self {
            RenameRule::CamelCase => {
                let mut out = String::with_capacity(name.len());
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        push_capitalized(&mut out, word);
                    }
                }
                out
            }
            RenameRule::PascalCase => {
                let mut out = String::with_capacity(name.len());
                for word in &words {
                    push_capitalized(&mut out, word);
                }
                out
            }
            RenameRule::SnakeCase => join_mapped(&words, "_", str::to_lowercase),
            RenameRule::KebabCase => join_mapped(&words, "-", str::to_lowercase),
            RenameRule::ScreamingSnakeCase => join_mapped(&words, "_", str::to_uppercase),
            RenameRule::Lowercase => name.to_lowercase(),
            RenameRule::Uppercase => name.to_uppercase(),
        }
    }
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

fn join_mapped(words: &[String], sep: &str, f: fn(&str) -> String) -> String {
    words.iter().map(|w| f(w)).collect::<Vec<_>>().join(sep)
}

/// Splits on `_`, `-` and lower-to-upper case boundaries.
fn split_into_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in name.chars() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(core::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && current.chars().last().is_some_and(char::is_lowercase) {
            words.push(core::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
