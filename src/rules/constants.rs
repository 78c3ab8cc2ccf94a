//! Default rule table

/// Key of the trailing-character rule
pub const TERMINATION_KEY: &str = "termination";

/// Characters a name must not end with
pub const TRAILING_CHARACTERS: &[char] = &[',', ' '];

/// Forbidden characters and the replacement each one is converted to
pub const DEFAULT_LITERAL_RULES: &[(char, &str)] = &[
    ('<', "("),
    ('>', ")"),
    (':', "-"),
    ('"', "-"),
    ('|', "_"),
    ('?', "."),
    ('*', "x"),
    ('\u{f022}', "-"),
    ('\\', "_"),
    ('\r', ""),
];
