/// Tokenize a command segment into words using shlex (POSIX word splitting).
pub fn tokenize(command: &str) -> Vec<String> {
    shlex::split(command).unwrap_or_else(|| {
        // Fallback: simple whitespace splitting if shlex can't parse
        command.split_whitespace().map(String::from).collect()
    })
}

/// Whether a word is a leading `VAR=value` assignment.
pub fn is_assignment(word: &str) -> bool {
    let Some((name, _)) = word.split_once('=') else {
        return false;
    };
    name.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Basename of a command word: `/usr/bin/git` → `git`, `./runner` → `runner`.
pub fn basename(word: &str) -> &str {
    match word.rsplit_once('/') {
        Some((_, name)) if !name.is_empty() => name,
        _ => word,
    }
}

/// Words of a segment with leading `VAR=value` assignments removed.
pub fn command_words(command: &str) -> Vec<String> {
    let mut words = tokenize(command);
    let skip = words.iter().take_while(|w| is_assignment(w)).count();
    words.drain(..skip);
    words
}
