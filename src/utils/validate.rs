//! 输入校验

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{RelievingSystemError, Result};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]{3,32}$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").unwrap());
static EMPLOYEE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{2,32}$").unwrap());

pub fn validate_username(username: &str) -> Result<()> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err(RelievingSystemError::validation(
            "Username must be 3-32 characters of letters, digits, underscore or hyphen",
        ))
    }
}

pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(RelievingSystemError::validation("Invalid email address"))
    }
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < 8 {
        return Err(RelievingSystemError::validation(
            "Password must be at least 8 characters",
        ));
    }
    if password.len() > 128 {
        return Err(RelievingSystemError::validation("Password is too long"));
    }
    Ok(())
}

pub fn validate_employee_id(employee_id: &str) -> Result<()> {
    if EMPLOYEE_ID_RE.is_match(employee_id) {
        Ok(())
    } else {
        Err(RelievingSystemError::validation(
            "Employee ID must be 2-32 characters of letters, digits or hyphen",
        ))
    }
}

/// 校验 YYYY-MM-DD 日期串
pub fn validate_date_str(date: &str) -> Result<()> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| RelievingSystemError::validation("Date must be in YYYY-MM-DD format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert!(validate_username("alice_w").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("a.b@example.edu").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_password() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_employee_id() {
        assert!(validate_employee_id("EMP-1024").is_ok());
        assert!(validate_employee_id("e").is_err());
        assert!(validate_employee_id("EMP 1024").is_err());
    }

    #[test]
    fn test_date_str() {
        assert!(validate_date_str("2023-03-10").is_ok());
        assert!(validate_date_str("2023-02-30").is_err());
        assert!(validate_date_str("10/03/2023").is_err());
    }
}
