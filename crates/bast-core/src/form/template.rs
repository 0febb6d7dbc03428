/// Placeholder names used in `template`, in order of appearance.
///
/// A `{` without a closing `}` is literal text.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                names.push(&after[..close]);
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    names
}

/// Replace every `{name}` with `lookup(name)`.
///
/// Returns the first unknown placeholder name as the error.
pub fn render<F>(template: &str, lookup: F) -> Result<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        let value = lookup(name).ok_or_else(|| name.to_string())?;
        out.push_str(&rest[..open]);
        out.push_str(&value);
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "day" => Some("Jumat".into()),
            "Project ID" => Some("PRJ-01".into()),
            _ => None,
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("BAST_{SOW}_{Project ID}.xlsx"),
            vec!["SOW", "Project ID"]
        );
        assert!(placeholders("no braces").is_empty());
        assert_eq!(placeholders("{a} {unclosed"), vec!["a"]);
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render("Hari {day}, proyek {Project ID}.", lookup).unwrap(),
            "Hari Jumat, proyek PRJ-01."
        );
        assert_eq!(render("plain {", lookup).unwrap(), "plain {");
    }

    #[test]
    fn test_render_unknown_placeholder() {
        assert_eq!(render("{weekday}", lookup), Err("weekday".to_string()));
    }
}
