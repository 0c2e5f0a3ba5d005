/// What opened a nested command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nest {
    /// `(` or `$(`
    Paren,
    /// `` ` ``
    Backtick,
}

/// Split a command into the simple commands it runs.
///
/// Boundaries are the shell operators (`&&`, `||`, `;`, `|`, `|&`, `&`,
/// newline) and the edges of subshells and substitutions (`(...)`, `$(...)`,
/// backticks), so `echo $(git push)` yields `echo` and `git push`.
/// Single quotes, double quotes and backslash escapes are respected;
/// substitutions still open inside double quotes. Empty segments are dropped.
/// Redirections like `2>&1` or `&>` are not operators.
pub fn split_compound_command(command: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut buf = String::new();
    let (mut sq, mut dq, mut esc) = (false, false, false);
    // Quote state outside each open nest, restored when it closes
    let mut nests: Vec<(Nest, bool)> = Vec::new();

    let mut chars = command.chars().peekable();
    while let Some(c) = chars.next() {
        if esc {
            buf.push(c);
            esc = false;
            continue;
        }
        if sq {
            if c == '\'' {
                sq = false;
            }
            buf.push(c);
            continue;
        }
        let next = chars.peek().copied();

        match c {
            '\\' => {
                esc = true;
                buf.push(c);
                continue;
            }
            '\'' if !dq => {
                sq = true;
                buf.push(c);
                continue;
            }
            '"' => {
                dq = !dq;
                buf.push(c);
                continue;
            }
            '`' => {
                flush(&mut buf, &mut segments);
                if !dq && nests.last().is_some_and(|(n, _)| *n == Nest::Backtick) {
                    if let Some((_, outer_dq)) = nests.pop() {
                        dq = outer_dq;
                    }
                } else {
                    nests.push((Nest::Backtick, dq));
                    dq = false;
                }
                continue;
            }
            '$' if next == Some('(') => {
                chars.next();
                flush(&mut buf, &mut segments);
                nests.push((Nest::Paren, dq));
                dq = false;
                continue;
            }
            '(' if !dq => {
                flush(&mut buf, &mut segments);
                nests.push((Nest::Paren, dq));
                continue;
            }
            ')' if !dq => {
                flush(&mut buf, &mut segments);
                if nests.last().is_some_and(|(n, _)| *n == Nest::Paren)
                    && let Some((_, outer_dq)) = nests.pop()
                {
                    dq = outer_dq;
                }
                continue;
            }
            _ => {}
        }
        if dq {
            buf.push(c);
            continue;
        }

        let (is_boundary, two_char) = match (c, next) {
            ('&', Some('&')) | ('|', Some('|')) | ('|', Some('&')) => (true, true),
            ('|', _) | (';', _) | ('\n', _) => (true, false),
            // `>&` / `<&` / `&>` are redirections, not backgrounding
            ('&', Some('>')) => (false, false),
            ('&', _) if buf.ends_with('>') || buf.ends_with('<') => (false, false),
            ('&', _) => (true, false),
            _ => (false, false),
        };

        if is_boundary {
            if two_char {
                chars.next();
            }
            flush(&mut buf, &mut segments);
        } else {
            buf.push(c);
        }
    }
    flush(&mut buf, &mut segments);
    segments
}

fn flush(buf: &mut String, segments: &mut Vec<String>) {
    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
    buf.clear();
}
