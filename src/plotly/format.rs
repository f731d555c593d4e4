//! Excel number format codes to d3 format strings.
//!
//! Plotly formats tick labels with d3-format (numbers) and d3-time-format
//! (dates). Only the first section of an Excel code (the one applied to
//! positive numbers) is translated; colors, locale tags, quoted literals and
//! padding directives are dropped.

/// Translate an Excel number format code into a d3 tick format.
///
/// Returns `None` for `General`, text (`@`) and codes without digit or date
/// placeholders.
pub fn to_d3_format(code: &str) -> Option<String> {
    let section = first_section(code);
    let cleaned = clean_section(section);
    let body = cleaned.text.trim();

    if body.is_empty() || body.eq_ignore_ascii_case("general") || body == "@" {
        return None;
    }
    if is_date_format(body) {
        return Some(date_format(body));
    }
    number_format(body, cleaned.currency)
}

/// Text up to the first `;` outside quotes.
fn first_section(code: &str) -> &str {
    let mut in_quotes = false;
    for (i, ch) in code.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => return &code[..i],
            _ => {},
        }
    }
    code
}

struct CleanedSection {
    text: String,
    currency: bool,
}

fn clean_section(section: &str) -> CleanedSection {
    let mut text = String::with_capacity(section.len());
    let mut currency = false;
    let mut chars = section.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let mut literal = String::new();
                for c in chars.by_ref() {
                    if c == '"' {
                        break;
                    }
                    literal.push(c);
                }
                currency |= literal.contains('$');
            },
            '[' => {
                let mut tag = String::new();
                for c in chars.by_ref() {
                    if c == ']' {
                        break;
                    }
                    tag.push(c);
                }
                if let Some(symbol) = tag.strip_prefix('$') {
                    currency |= symbol.starts_with('$');
                } else if !tag.is_empty() && tag.chars().all(|c| matches!(c, 'h' | 'H' | 'm' | 'M' | 's' | 'S')) {
                    // Elapsed time such as [h]
                    text.push_str(&tag);
                }
            },
            '\\' => {
                if chars.next() == Some('$') {
                    currency = true;
                }
            },
            '_' | '*' => {
                chars.next();
            },
            '$' => currency = true,
            _ => text.push(ch),
        }
    }

    CleanedSection { text, currency }
}

fn is_date_format(body: &str) -> bool {
    body.chars()
        .any(|c| matches!(c.to_ascii_lowercase(), 'y' | 'd' | 'h' | 's' | 'm'))
}

fn number_format(body: &str, currency: bool) -> Option<String> {
    let is_placeholder = |c: char| matches!(c, '0' | '#' | '?');
    if !body.chars().any(is_placeholder) {
        return None;
    }

    let percent = body.contains('%');
    let scientific = body.contains("E+") || body.contains("E-") || body.contains("e+") || body.contains("e-");
    let mantissa = body
        .find(['E', 'e'])
        .filter(|_| scientific)
        .map_or(body, |pos| &body[..pos]);

    let (integer, fraction) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };
    let grouping = integer
        .char_indices()
        .any(|(i, c)| c == ',' && integer[i + 1..].chars().next().is_some_and(is_placeholder));
    let decimals: String = fraction.chars().take_while(|c| is_placeholder(*c)).collect();
    let trim = decimals.contains('#');

    let kind = if percent {
        '%'
    } else if scientific {
        'e'
    } else {
        'f'
    };

    Some(format!(
        "{}{}.{}{}{}",
        if currency { "$" } else { "" },
        if grouping { "," } else { "" },
        decimals.len(),
        if trim { "~" } else { "" },
        kind
    ))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Token {
    Hour,
    Minute,
    Other,
}

fn date_format(body: &str) -> String {
    let twelve_hour = {
        let upper = body.to_ascii_uppercase();
        upper.contains("AM/PM") || upper.contains("A/P")
    };
    let chars: Vec<char> = body.chars().collect();
    let mut out = String::new();
    let mut last = Token::Other;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let lower = ch.to_ascii_lowercase();

        if lower == 'a' {
            let rest: String = chars[i..].iter().collect::<String>().to_ascii_uppercase();
            if rest.starts_with("AM/PM") {
                out.push_str("%p");
                i += 5;
                continue;
            }
            if rest.starts_with("A/P") {
                out.push_str("%p");
                i += 3;
                continue;
            }
        }

        if !matches!(lower, 'y' | 'm' | 'd' | 'h' | 's') {
            if ch == '%' {
                out.push_str("%%");
            } else {
                out.push(ch);
            }
            i += 1;
            continue;
        }

        let run = chars[i..]
            .iter()
            .take_while(|c| c.to_ascii_lowercase() == lower)
            .count();
        i += run;

        match lower {
            'y' => out.push_str(if run > 2 { "%Y" } else { "%y" }),
            'd' => out.push_str(match run {
                1 => "%-d",
                2 => "%d",
                3 => "%a",
                _ => "%A",
            }),
            'h' => {
                out.push_str(match (twelve_hour, run) {
                    (true, 1) => "%-I",
                    (true, _) => "%I",
                    (false, 1) => "%-H",
                    (false, _) => "%H",
                });
                last = Token::Hour;
                continue;
            },
            's' => out.push_str("%S"),
            'm' => {
                let next_is_seconds = chars[i..]
                    .iter()
                    .find(|c| c.is_ascii_alphabetic())
                    .is_some_and(|c| c.eq_ignore_ascii_case(&'s'));
                if run <= 2 && (last == Token::Hour || next_is_seconds) {
                    out.push_str("%M");
                    last = Token::Minute;
                    continue;
                }
                out.push_str(match run {
                    1 => "%-m",
                    2 => "%m",
                    3 => "%b",
                    _ => "%B",
                });
            },
            _ => {},
        }
        last = Token::Other;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formats() {
        let cases = [
            ("0", ".0f"),
            ("0.00", ".2f"),
            ("#,##0", ",.0f"),
            ("#,##0.000", ",.3f"),
            ("0%", ".0%"),
            ("0.0%", ".1%"),
            ("0.00E+00", ".2e"),
            ("0.0#", ".2~f"),
            ("$#,##0.00", "$,.2f"),
            ("\"$\"#,##0", "$,.0f"),
            ("[$$-409]#,##0.00;[Red]-[$$-409]#,##0.00", "$,.2f"),
            ("_-* #,##0.00_-;-* #,##0.00_-", ",.2f"),
            ("0.00\" kN\"", ".2f"),
            ("[Blue]0.0;[Red]-0.0", ".1f"),
        ];
        for (code, expected) in cases {
            assert_eq!(to_d3_format(code).as_deref(), Some(expected), "format code {code}");
        }
    }

    #[test]
    fn test_date_formats() {
        let cases = [
            ("yyyy-mm-dd", "%Y-%m-%d"),
            ("d/m/yyyy h:mm", "%-d/%-m/%Y %-H:%M"),
            ("mmm yy", "%b %y"),
            ("dddd, mmmm d", "%A, %B %-d"),
            ("h:mm AM/PM", "%-I:%M %p"),
            ("mm:ss", "%M:%S"),
            ("[$-409]hh:mm:ss", "%H:%M:%S"),
        ];
        for (code, expected) in cases {
            assert_eq!(to_d3_format(code).as_deref(), Some(expected), "format code {code}");
        }
    }

    #[test]
    fn test_untranslatable_formats() {
        for code in ["General", "general", "@", "", ";;;", "\"text only\""] {
            assert_eq!(to_d3_format(code), None, "format code {code}");
        }
    }
}
