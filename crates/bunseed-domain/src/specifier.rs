//! Classification of raw dependency specifiers.
//!
//! The classifier is a closed dispatch over literal prefixes, checked in the
//! fixed order `tarball:`, `github:`, `git:`, else npm. Everything borrows
//! from the raw input; one specifier is classified exactly once per process.

/// One dependency identifier in the form the lockfile spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier<'a> {
    Npm(NpmSpecifier<'a>),
    Tarball { url: &'a str },
    Github { ident: &'a str },
    Git { ident: &'a str },
}

/// An npm-style specifier split into name and version fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpmSpecifier<'a> {
    /// Everything before the last `@`; the whole specifier when no `@` exists.
    pub name: &'a str,
    /// Absent only for a bare name with no `@` anywhere.
    pub version: Option<VersionFields<'a>>,
}

/// Version substrings as opaque byte ranges. No semantic version parsing
/// happens here or anywhere downstream: a `-` or `+` inside the prerelease
/// or build text is not special-cased further, and malformed version text is
/// carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionFields<'a> {
    /// From the last `@` (inclusive) up to the first `-` or `+`.
    pub core: &'a str,
    /// Text after the first `-`, up to any `+`.
    pub prerelease: Option<&'a str>,
    /// Text after the first `+`.
    pub build: Option<&'a str>,
}

impl<'a> Specifier<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if let Some(url) = raw.strip_prefix("tarball:") {
            Specifier::Tarball { url }
        } else if let Some(ident) = raw.strip_prefix("github:") {
            Specifier::Github { ident }
        } else if let Some(ident) = raw.strip_prefix("git:") {
            Specifier::Git { ident }
        } else {
            Specifier::Npm(NpmSpecifier::decompose(raw))
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Specifier::Npm(_) => "npm",
            Specifier::Tarball { .. } => "tarball",
            Specifier::Github { .. } => "github",
            Specifier::Git { .. } => "git",
        }
    }
}

impl<'a> NpmSpecifier<'a> {
    /// Split `name@version[-prerelease][+build]` on the **last** `@`, then the
    /// first `-`, then the first `+`. Single left-to-right scans, no
    /// backtracking.
    pub fn decompose(raw: &'a str) -> Self {
        let Some(at) = raw.rfind('@') else {
            return Self {
                name: raw,
                version: None,
            };
        };
        let name = &raw[..at];
        let ver = &raw[at..];

        let fields = if let Some(dash) = ver.find('-') {
            let core = &ver[..dash];
            let pre_and_build = &ver[dash + 1..];
            match pre_and_build.find('+') {
                Some(plus) => VersionFields {
                    core,
                    prerelease: Some(&pre_and_build[..plus]),
                    build: Some(&pre_and_build[plus + 1..]),
                },
                None => VersionFields {
                    core,
                    prerelease: Some(pre_and_build),
                    build: None,
                },
            }
        } else if let Some(plus) = ver.find('+') {
            VersionFields {
                core: &ver[..plus],
                prerelease: None,
                build: Some(&ver[plus + 1..]),
            }
        } else {
            VersionFields {
                core: ver,
                prerelease: None,
                build: None,
            }
        };

        Self {
            name,
            version: Some(fields),
        }
    }
}
