//! Identifier case conversion between `underscore_case` and `camelCase`.
//!
//! Both conversions are pure and idempotent: applying one to its own output
//! changes nothing. They are not inverses of each other for identifiers that
//! do not already follow the source convention.

/// Convert an identifier to `underscore_case`.
///
/// Every ASCII uppercase letter is replaced by `_` followed by its lowercase
/// form. An identifier starting with an uppercase letter therefore gains a
/// leading underscore (`Name` → `_name`).
#[must_use]
pub fn to_snake(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for ch in identifier.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert an identifier to `camelCase`.
///
/// Every `_` followed by an ASCII lowercase letter or digit is removed and the
/// following character uppercased (`user_name` → `userName`). A digit keeps
/// absorbing underscores in front of it (`a__1` → `a1`), so the output never
/// contains a `_[a-z0-9]` pair.
#[must_use]
pub fn to_camel(identifier: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(identifier.len());
    for ch in identifier.chars() {
        let mut ch = ch;
        while (ch.is_ascii_lowercase() || ch.is_ascii_digit()) && out.last() == Some(&'_') {
            out.pop();
            ch = ch.to_ascii_uppercase();
        }
        out.push(ch);
    }
    out.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NamingScheme;

    /// Identifiers in every shape the converters have to cope with.
    const CORPUS: &[&str] = &[
        "",
        "id",
        "userName",
        "user_name",
        "UserName",
        "_user_name",
        "user__name",
        "a__1",
        "__1",
        "_",
        "___",
        "name_",
        "HTMLParser",
        "address2_line",
        "address_2_line",
        "ALLCAPS",
        "mixed_Case_name",
        "x_9_y",
        "créé_le",
        "ümlautName",
    ];

    #[test]
    fn test_to_snake_basic() {
        assert_eq!(to_snake("userName"), "user_name");
        assert_eq!(to_snake("createdAtDate"), "created_at_date");
        assert_eq!(to_snake("id"), "id");
        assert_eq!(to_snake("user_name"), "user_name");
    }

    #[test]
    fn test_to_snake_leading_uppercase_gains_underscore() {
        assert_eq!(to_snake("Name"), "_name");
    }

    #[test]
    fn test_to_snake_consecutive_capitals() {
        assert_eq!(to_snake("HTMLParser"), "_h_t_m_l_parser");
    }

    #[test]
    fn test_to_snake_leaves_non_ascii_alone() {
        assert_eq!(to_snake("Ärger"), "Ärger");
    }

    #[test]
    fn test_to_camel_basic() {
        assert_eq!(to_camel("user_name"), "userName");
        assert_eq!(to_camel("created_at_date"), "createdAtDate");
        assert_eq!(to_camel("userName"), "userName");
        assert_eq!(to_camel("address_2"), "address2");
    }

    #[test]
    fn test_to_camel_keeps_underscore_before_uppercase() {
        assert_eq!(to_camel("mixed_Case"), "mixed_Case");
        assert_eq!(to_camel("name_"), "name_");
    }

    #[test]
    fn test_to_camel_double_underscore() {
        assert_eq!(to_camel("user__name"), "user_Name");
        assert_eq!(to_camel("a__1"), "a1");
    }

    #[test]
    fn test_to_camel_leading_underscore() {
        assert_eq!(to_camel("_user_name"), "UserName");
    }

    #[test]
    fn test_to_snake_idempotent() {
        for id in CORPUS {
            let once = to_snake(id);
            assert_eq!(to_snake(&once), once, "to_snake not idempotent for {id:?}");
        }
    }

    #[test]
    fn test_to_camel_idempotent() {
        for id in CORPUS {
            let once = to_camel(id);
            assert_eq!(to_camel(&once), once, "to_camel not idempotent for {id:?}");
        }
    }

    #[test]
    fn test_not_inverse_for_non_conforming_input() {
        // The digit absorbs its underscore on the way to camelCase and never gets it back.
        assert_eq!(to_snake(&to_camel("address_2_line")), "address2_line");
    }

    #[test]
    fn test_scheme_expected_name() {
        assert_eq!(NamingScheme::Snake.expected_name("userName"), "user_name");
        assert_eq!(NamingScheme::Camel.expected_name("user_name"), "userName");
    }
}
