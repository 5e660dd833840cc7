use crate::domain::model::Record;
use crate::utils::error::{InventoryError, Result};

/// Longest item name accepted from the outside, in bytes.
pub const MAX_NAME_LENGTH: usize = 29;
pub const MAX_CATEGORY_LENGTH: usize = 19;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| InventoryError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max: usize) -> Result<()> {
    let length = value.len();
    if length > max {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Length {} exceeds the limit of {} bytes", length, max),
        });
    }
    Ok(())
}

/// Field bounds the I/O layer enforces before a record reaches a container.
impl Validate for Record {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_max_length("name", &self.name, MAX_NAME_LENGTH)?;
        validate_max_length("category", &self.category, MAX_CATEGORY_LENGTH)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("capacity", 5, 1).is_ok());
        assert!(validate_positive_number("capacity", 0, 1).is_err());
    }

    #[test]
    fn test_validate_record_bounds() {
        assert!(Record::new("Rope", "tool", 2).validate().is_ok());
        assert!(Record::new("   ", "tool", 2).validate().is_err());
        assert!(Record::new("a".repeat(30), "tool", 2).validate().is_err());
        assert!(Record::new("a".repeat(29), "b".repeat(19), -3).validate().is_ok());
        assert!(Record::new("Rope", "b".repeat(20), 2).validate().is_err());
    }

    #[test]
    fn test_length_limits_count_bytes() {
        // 15 characters, 30 bytes
        let accented = "é".repeat(15);
        assert_eq!(accented.chars().count(), 15);
        assert!(matches!(
            Record::new(accented, "tool", 1).validate(),
            Err(InventoryError::InvalidConfigValueError { ref field, .. }) if field == "name"
        ));
        assert!(Record::new("é".repeat(14), "ração", 1).validate().is_ok());
        assert!(Record::new("Rope", "munição".repeat(2), 1).validate().is_ok());
        assert!(Record::new("Rope", "munição".repeat(3), 1).validate().is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3usize);
        let missing: Option<usize> = None;
        assert_eq!(*validate_required_field("capacity", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("capacity", &missing),
            Err(InventoryError::MissingConfigError { .. })
        ));
    }
}
