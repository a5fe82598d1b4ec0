//! printf-style substitution for translated templates.
//!
//! Catalog entries keep the C format placeholders of their msgids
//! (`"Lexical error at line %d, column %d"`), so translated text is filled
//! in after lookup.

use std::fmt::Display;

/// Replaces `%d` and `%s` placeholders in `template` with `args`, in order.
///
/// `%%` produces a literal percent sign. Placeholders without a matching
/// argument, and unknown conversions, are copied through unchanged.
///
/// # Example
///
/// ```
/// use dreamc_i18n::format_message;
///
/// let text = format_message("Lexical error at line %d, column %d", &[&3, &14]);
/// assert_eq!(text, "Lexical error at line 3, column 14");
/// ```
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            },
            Some(conversion @ ('d' | 's')) => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => {
                        out.push('%');
                        out.push(conversion);
                    },
                }
            },
            _ => out.push('%'),
        }
    }

    out
}
