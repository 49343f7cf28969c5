//! Positional interpolation of runtime templates
//!
//! Templates use `{}` for the next argument and `{N}` for an explicit index.
//! `{{` and `}}` produce literal braces. A placeholder without a matching
//! argument is left as written, and arguments nothing referenced are
//! appended as ` %!(EXTRA a, b)`.

use super::value::Value;
use std::fmt::Write;

/// Interpolate `args` into `template`
///
/// With no arguments the template is returned untouched, braces included.
///
/// ```
/// use rust_log_facade::core::interpolate::interpolate;
/// use rust_log_facade::Value;
///
/// let out = interpolate("{} of {}", &[Value::from(3), Value::from(5)]);
/// assert_eq!(out, "3 of 5");
/// ```
pub fn interpolate(template: &str, args: &[Value]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut used = vec![false; args.len()];
    let mut next = 0;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            rest = "";
            break;
        };
        let inner = &tail[1..close];
        let placeholder = &tail[..=close];
        rest = &tail[close + 1..];

        let index = if inner.is_empty() {
            let index = next;
            next += 1;
            Some(index)
        } else {
            inner.trim().parse::<usize>().ok()
        };

        match index.and_then(|i| args.get(i).map(|arg| (i, arg))) {
            Some((i, arg)) => {
                used[i] = true;
                let _ = write!(out, "{}", arg);
            }
            None => out.push_str(placeholder),
        }
    }
    out.push_str(rest);

    let extra: Vec<String> = args
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(arg, _)| arg.to_string())
        .collect();
    if !extra.is_empty() {
        let _ = write!(out, " %!(EXTRA {})", extra.join(", "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential() {
        let out = interpolate(
            "user {} logged in from {}",
            &[Value::from("ann"), Value::from("10.0.0.1")],
        );
        assert_eq!(out, "user ann logged in from 10.0.0.1");
    }

    #[test]
    fn test_indexed() {
        let out = interpolate("{1} before {0}, then {}", &[Value::from("a"), Value::from("b")]);
        assert_eq!(out, "b before a, then a");
    }

    #[test]
    fn test_escapes() {
        let out = interpolate("{{literal}} {}", &[Value::from(1)]);
        assert_eq!(out, "{literal} 1");
    }

    #[test]
    fn test_missing_argument_kept() {
        let out = interpolate("{} and {}", &[Value::from(1)]);
        assert_eq!(out, "1 and {}");
    }

    #[test]
    fn test_extra_arguments() {
        let out = interpolate("done", &[Value::from(1), Value::from("x")]);
        assert_eq!(out, "done %!(EXTRA 1, x)");
    }

    #[test]
    fn test_no_args_is_verbatim() {
        assert_eq!(interpolate("a {{b}} {}", &[]), "a {{b}} {}");
    }

    #[test]
    fn test_unterminated_brace() {
        let out = interpolate("open { here", &[Value::from(1)]);
        assert_eq!(out, "open { here %!(EXTRA 1)");
    }

    #[test]
    fn test_multibyte_text() {
        let out = interpolate("héllo {} ünïcode", &[Value::from("wörld")]);
        assert_eq!(out, "héllo wörld ünïcode");
    }
}
