use std::{fmt, str::FromStr};

use anyhow::bail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    pub fn validate(s: &str) -> anyhow::Result<()> {
        if s.trim().is_empty() {
            bail!("title must not be empty")
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for TaskTitle {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s).map(|_| Self(s.trim().to_string()))
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!("".parse::<TaskTitle>().is_err());
        assert!("   ".parse::<TaskTitle>().is_err());
        assert!("\t\n".parse::<TaskTitle>().is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let title: TaskTitle = "  pay rent  ".parse().unwrap();
        assert_eq!(title.as_str(), "pay rent");
    }

    #[test]
    fn displays_inner_text() {
        let title: TaskTitle = "pay rent".parse().unwrap();
        assert_eq!(title.to_string(), "pay rent");
    }
}
