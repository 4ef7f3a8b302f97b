//! Kebab-case slugging for proposal names.
//!
//! Word boundaries:
//!
//! | Input         | Output          |
//! |---------------|-----------------|
//! | `My Cool Idea`| `my-cool-idea`  |
//! | `myIdea`      | `my-idea`       |
//! | `XMLHttp`     | `xml-http`      |
//! | `es2025 ext`  | `es-2025-ext`   |
//! | `--a__b--`    | `a-b`           |
//! | `Café Crème`  | `cafe-creme`    |
//! | `Don't stop`  | `dont-stop`     |
//! | `提案`         | `提案`           |

use deunicode::deunicode_char;

/// Apostrophes are dropped, not treated as separators.
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Split `input` into lowercase words.
///
/// Accented Latin letters are folded to ASCII first and apostrophes removed.
/// Anything that is not a letter or digit separates words. Inside an
/// alphanumeric run a new word starts on a lower→upper transition, before the
/// last capital of an acronym followed by a lowercase letter, and on every
/// letter↔digit transition. Letters from other scripts are kept as they are.
pub fn words(input: &str) -> Vec<String> {
    let chars = fold(input);
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }
        // A non-empty `current` means chars[i - 1] was alphanumeric.
        if !current.is_empty() && starts_word(chars[i - 1], c, chars.get(i + 1).copied()) {
            flush(&mut current, &mut words);
        }
        current.extend(c.to_lowercase());
    }
    flush(&mut current, &mut words);
    words
}

/// Strip apostrophes and fold accented Latin letters (`Ü` → `U`, `ß` → `ss`).
fn fold(input: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(input.len());
    for c in input.chars().filter(|c| !APOSTROPHES.contains(c)) {
        match deunicode_char(c) {
            Some(ascii) if is_accented_latin(c) => out.extend(ascii.chars()),
            _ => out.push(c),
        }
    }
    out
}

fn is_accented_latin(c: char) -> bool {
    c.is_alphabetic()
        && matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
}

fn starts_word(prev: char, c: char, next: Option<char>) -> bool {
    if prev.is_numeric() != c.is_numeric() {
        return true;
    }
    if c.is_uppercase() {
        if prev.is_lowercase() {
            return true;
        }
        // Last capital of an acronym: "XMLHttp" splits before the "H".
        if prev.is_uppercase() && next.is_some_and(char::is_lowercase) {
            return true;
        }
    }
    false
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Lowercase, hyphen-joined form of `input`. Idempotent.
pub fn kebab_case(input: &str) -> String {
    words(input).join("-")
}
