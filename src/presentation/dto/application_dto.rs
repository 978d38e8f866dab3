use serde::{Deserialize, Serialize};

use crate::domain::entities::FreelanceApplication;
use crate::presentation::dto::Validate;

/// Freelance application form as submitted by a candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationFormDto {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub portfolio_link: Option<String>,
}

impl Validate for ApplicationFormDto {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err("Name and Email are required.".to_string());
        }
        Ok(())
    }
}

impl ApplicationFormDto {
    pub fn into_application(self) -> FreelanceApplication {
        FreelanceApplication {
            name: self.name,
            email: self.email,
            message: self.message,
            portfolio_link: self.portfolio_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_email_fails_validation() {
        let form = ApplicationFormDto {
            name: "Ada".to_string(),
            email: String::new(),
            ..Default::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn complete_form_converts() {
        let form = ApplicationFormDto {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: Some("Available from March".to_string()),
            portfolio_link: None,
        };
        assert!(form.validate().is_ok());

        let application = form.into_application();
        assert_eq!(application.name, "Ada");
        assert_eq!(application.email, "ada@example.com");
    }
}
