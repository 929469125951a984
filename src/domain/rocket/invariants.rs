use super::entity::Rocket;
use crate::domain::{DomainError, DomainResult};

/// Validates the invariants of a user-authored Rocket
///
/// Remote records are only schema-checked on decode; these rules apply to
/// records entering local storage.
pub fn validate_rocket(rocket: &Rocket) -> DomainResult<()> {
    validate_id(&rocket.id)?;
    validate_name(&rocket.name)?;
    validate_images(&rocket.flickr_images)?;
    Ok(())
}

fn validate_id(id: &str) -> DomainResult<()> {
    if id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Rocket id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Rocket name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_images(images: &[String]) -> DomainResult<()> {
    if let Some(position) = images.iter().position(|url| url.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(format!(
            "Image URL at position {} cannot be empty",
            position
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rocket() -> Rocket {
        Rocket::new_custom(
            "Starship".to_string(),
            "Fully reusable".to_string(),
            vec!["https://example.com/starship.jpg".to_string()],
            10_000_000,
            "United States".to_string(),
            NaiveDate::from_ymd_opt(2023, 4, 20).unwrap(),
        )
    }

    #[test]
    fn test_valid_rocket() {
        assert!(validate_rocket(&rocket()).is_ok());
    }

    #[test]
    fn test_blank_name_fails() {
        let mut r = rocket();
        r.name = "   ".to_string();
        assert!(validate_rocket(&r).is_err());
    }

    #[test]
    fn test_empty_id_fails() {
        let mut r = rocket();
        r.id = String::new();
        assert!(validate_rocket(&r).is_err());
    }

    #[test]
    fn test_blank_image_url_fails() {
        let mut r = rocket();
        r.flickr_images.push(" ".to_string());
        let err = validate_rocket(&r).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }
}
