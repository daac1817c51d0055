//! Small string helpers shared by the page components.

/// Turn a content key into a DOM-id-safe slug.
/// Lowercases, collapses runs of non-alphanumeric chars into one hyphen
/// and trims hyphens at both ends.
pub fn slugify<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref().to_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut prev_dash = false;

    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }

    out.trim_matches('-').to_string()
}

/// DOM id of the `<video>` element for a team member's clip.
pub fn clip_element_id(key: &str) -> String {
    format!("clip-{}", slugify(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("  Fares Gabor!! "), "fares-gabor");
        assert_eq!(slugify("about.team.ward"), "about-team-ward");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn clip_ids_are_prefixed() {
        assert_eq!(clip_element_id("Ward"), "clip-ward");
    }
}
