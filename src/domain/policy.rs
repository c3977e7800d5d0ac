use std::collections::BTreeSet;
use std::fmt::Display;

const PROTECTED_FILES: [&str; 7] = [
    ".env",
    "package.json",
    "biome.json",
    "tsconfig.json",
    "vitest.config.ts",
    ".gitignore",
    "bun.lock",
];

const RESERVED_DIR_MARKER: &str = "/.claude/";

/// Which files warrant asking before they're modified.
#[derive(Debug, Clone)]
pub struct ProtectionPolicy {
    protected_files: BTreeSet<String>,
    reserved_dir_marker: String,
}

impl Default for ProtectionPolicy {
    fn default() -> Self {
        Self::new(PROTECTED_FILES, RESERVED_DIR_MARKER)
    }
}

impl ProtectionPolicy {
    pub fn new<I, S>(protected_files: I, reserved_dir_marker: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            protected_files: protected_files.into_iter().map(Into::into).collect(),
            reserved_dir_marker: reserved_dir_marker.to_string(),
        }
    }

    pub fn is_protected_file(&self, basename: &str) -> bool {
        self.protected_files.contains(basename)
    }

    pub fn is_in_reserved_dir(&self, path: &str) -> bool {
        path.contains(&self.reserved_dir_marker)
    }
}

impl Display for ProtectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let files = self
            .protected_files
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>()
            .join("\n  - ");

        write!(
            f,
            "protected files:\n  - {}\nreserved directory marker: {}",
            files, self.reserved_dir_marker
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn protected_files_are_matched_exactly() {
        // GIVEN
        let policy = ProtectionPolicy::default();
        let cases = vec![
            (".env", true),
            ("package.json", true),
            ("bun.lock", true),
            (".env.local", false),
            ("my-package.json", false),
            ("Package.json", false),
            ("", false),
        ];

        // WHEN
        // THEN
        for (basename, expected) in cases {
            let result = policy.is_protected_file(basename);
            assert_eq!(
                result, expected,
                "expected {} for basename '{}', got {}",
                expected, basename, result
            );
        }
    }

    #[test]
    fn reserved_dir_is_matched_as_substring() {
        // GIVEN
        let policy = ProtectionPolicy::default();
        let cases = vec![
            ("/repo/.claude/settings.json", true),
            ("/repo/.claude/hooks/guard.py", true),
            (".claude/settings.json", false),
            ("/repo/.claude", false),
            ("/repo/claude/settings.json", false),
            ("/repo/.claudeignore", false),
        ];

        // WHEN
        // THEN
        for (path, expected) in cases {
            let result = policy.is_in_reserved_dir(path);
            assert_eq!(
                result, expected,
                "expected {} for path '{}', got {}",
                expected, path, result
            );
        }
    }

    #[test]
    fn default_policy_is_displayed_correctly() {
        // GIVEN
        let policy = ProtectionPolicy::default();

        // WHEN
        // THEN
        assert_snapshot!(policy.to_string(), @r"
        protected files:
          - .env
          - .gitignore
          - biome.json
          - bun.lock
          - package.json
          - tsconfig.json
          - vitest.config.ts
        reserved directory marker: /.claude/
        ");
    }
}
