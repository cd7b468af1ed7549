use std::fmt::Display;

use crate::errors::ConversionError;

#[derive(
    Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(try_from = "String", into = "String")]
/// Email address used as the login key. Only the overall shape is checked
/// (`local@domain`), deliverability is not a concern here
pub struct Email(String);

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl Email {
    pub const MAX_LENGTH: usize = 254;
}

impl TryFrom<String> for Email {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ConversionError::Empty);
        }
        if value.len() > Self::MAX_LENGTH {
            return Err(ConversionError::MaxExceeded {
                max: Self::MAX_LENGTH,
                actual: value.len(),
            });
        }
        match value.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(value))
            }
            _ => Err(ConversionError::InvalidFormat {
                expected: "an address of the form local@domain",
            }),
        }
    }
}

impl TryFrom<&str> for Email {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ConversionError::Empty);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for DisplayName {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const EXPECTED_EMAIL_FORMAT: ConversionError = ConversionError::InvalidFormat {
        expected: "an address of the form local@domain",
    };

    #[rstest]
    #[case::empty("", ConversionError::Empty)]
    #[case::too_long(format!("{}@x.com", "a".repeat(250)), ConversionError::MaxExceeded{max:254, actual:256})]
    #[case::no_at("finance.omnitrackr.com", EXPECTED_EMAIL_FORMAT)]
    #[case::no_local("@omnitrackr.com", EXPECTED_EMAIL_FORMAT)]
    #[case::no_domain("finance@", EXPECTED_EMAIL_FORMAT)]
    #[case::two_at("finance@@omnitrackr.com", EXPECTED_EMAIL_FORMAT)]
    fn illegal_email(#[case] email: String, #[case] expect: ConversionError) {
        // Act
        let actual: Result<Email, ConversionError> = email.try_into();

        // Assert
        assert_eq!(actual.unwrap_err(), expect);
    }

    #[test]
    fn legal_email() {
        // Act
        let actual = Email::try_from("admin@omnitrackr.com").unwrap();

        // Assert
        assert_eq!(actual.as_ref(), "admin@omnitrackr.com");
    }

    #[test]
    fn empty_display_name() {
        // Act
        let actual = DisplayName::try_from("");

        // Assert
        assert_eq!(actual.unwrap_err(), ConversionError::Empty);
    }

    #[test]
    fn long_display_name_is_kept() {
        // Arrange
        let name = "Maximiliana Konstantinopoulou-Vanderbilt";

        // Act
        let actual = DisplayName::try_from(name).unwrap();

        // Assert
        assert_eq!(actual.as_ref(), name);
    }

    #[test]
    fn deserialize_validates_email() {
        // Act
        let actual: Result<Email, _> = serde_json::from_str("\"not-an-email\"");

        // Assert
        assert!(actual.is_err());
    }
}
