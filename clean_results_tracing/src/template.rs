//! Positional rendering of error message templates.
//!
//! Templates use `{Name}` placeholders, which bind to metadata by position
//! rather than by name: the first placeholder takes the first item, and so
//! on. `{{` and `}}` stand for literal braces. Anything after the name inside
//! a placeholder (alignment or format, as in `{Total,8:N2}`) is ignored and
//! the item is rendered with its `Display` output.

use clean_results::MetadataValue;

/// Substitutes the placeholders in `template` with `args` in order of
/// appearance.
///
/// A placeholder with no remaining argument is kept verbatim, as is a `{`
/// that is never closed. Surplus arguments are ignored.
///
/// # Examples
///
/// ```
/// use clean_results::metadata;
/// use clean_results_tracing::render;
///
/// let args = metadata!["sda1", 98];
/// assert_eq!(render("{Disk} is {Percent}% full", &args), "sda1 is 98% full");
/// assert_eq!(render("{{literal}} {Missing}", &[]), "{literal} {Missing}");
/// ```
#[must_use]
pub fn render(template: &str, args: &[MetadataValue]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                out.push('{');
                chars.next();
            }
            '}' if chars.peek() == Some(&'}') => {
                out.push('}');
                chars.next();
            }
            '{' => {
                let mut hole = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    hole.push(inner);
                }
                let arg = if closed { remaining.next() } else { None };
                match arg {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(&hole);
                        if closed {
                            out.push('}');
                        }
                    }
                }
            }
            other => out.push(other),
        }
    }
    out
}
