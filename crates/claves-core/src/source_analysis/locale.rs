// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Reporting locale for diagnostic messages.

/// The language diagnostics are rendered in.
///
/// Spanish is the default, matching the language's own keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Spanish: `Error Léxico: ... en línea 1, columna 3`
    #[default]
    Es,
    /// English: `Lexical error: ... at line 1, column 3`
    En,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            other => Err(format!("unknown locale '{other}': expected 'es' or 'en'")),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Es => write!(f, "es"),
            Self::En => write!(f, "en"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        assert_eq!("es".parse::<Locale>(), Ok(Locale::Es));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::En.to_string(), "en");
        assert_eq!(Locale::default(), Locale::Es);
    }
}
