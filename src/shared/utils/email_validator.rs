use crate::services::email_delivery_provider::DeliveryError;

pub fn validate_and_normalize_email(email: &str) -> Result<String, DeliveryError> {
    let trimmed = email.trim();

    if !email_address::EmailAddress::is_valid(trimmed) {
        return Err(DeliveryError::InvalidAddress(
            "Invalid email format. Must be in format user@domain.tld".to_string(),
        ));
    }

    // Additional validation: require a TLD (dot after @)
    if let Some(at_pos) = trimmed.find('@') {
        let domain_part = &trimmed[at_pos + 1..];
        if !domain_part.contains('.') {
            return Err(DeliveryError::InvalidAddress(
                "Invalid email format. Domain must include a TLD (e.g., .com, .org)".to_string(),
            ));
        }
    }

    // Normalize to lowercase for consistent logging and delivery
    Ok(trimmed.to_lowercase())
}
