//! Input validation utilities

use crate::models::{Credentials, EntryForm, NewLostItem};

/// Message shown when the entry form is incomplete
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Message shown when a search is submitted without an item name
pub const ITEM_NAME_REQUIRED: &str = "Please provide item name.";

/// Validate registration credentials
pub fn validate_credentials(credentials: &Credentials) -> Result<(), String> {
    if credentials.name.is_empty() {
        return Err("Name is required".to_string());
    }

    if credentials.enrollment.is_empty() {
        return Err("Enrollment number is required".to_string());
    }

    Ok(())
}

/// Validate the entry form and turn it into a storable record.
///
/// Every field is required. Values are stored exactly as submitted.
pub fn validate_entry(form: &EntryForm) -> Result<NewLostItem, String> {
    let fields = [
        &form.name,
        &form.stream,
        &form.year,
        &form.contact_no,
        &form.item_name,
        &form.date,
    ];

    if fields.iter().any(|value| value.is_empty()) {
        return Err(ALL_FIELDS_REQUIRED.to_string());
    }

    Ok(NewLostItem {
        name: form.name.clone(),
        stream: form.stream.clone(),
        year: form.year.clone(),
        contact: form.contact_no.clone(),
        item_name: form.item_name.clone(),
        found_date: form.date.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_entry() -> EntryForm {
        EntryForm {
            name: "Bob".to_string(),
            stream: "CS".to_string(),
            year: "2".to_string(),
            contact_no: "555".to_string(),
            item_name: "Wallet".to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_complete_entry_maps_to_record() {
        let item = validate_entry(&complete_entry()).unwrap();
        assert_eq!(item.contact, "555");
        assert_eq!(item.item_name, "Wallet");
        assert_eq!(item.found_date, "2024-01-01");
    }

    #[test]
    fn test_any_empty_entry_field_is_rejected() {
        let blankers: [fn(&mut EntryForm); 6] = [
            |f| f.name.clear(),
            |f| f.stream.clear(),
            |f| f.year.clear(),
            |f| f.contact_no.clear(),
            |f| f.item_name.clear(),
            |f| f.date.clear(),
        ];

        for blank in blankers {
            let mut form = complete_entry();
            blank(&mut form);
            assert_eq!(validate_entry(&form), Err(ALL_FIELDS_REQUIRED.to_string()));
        }
    }

    #[test]
    fn test_whitespace_counts_as_a_value() {
        let mut form = complete_entry();
        form.year = " ".to_string();
        assert!(validate_entry(&form).is_ok());
    }

    #[test]
    fn test_credentials_require_both_fields() {
        let missing_name = Credentials {
            name: String::new(),
            enrollment: "E100".to_string(),
        };
        assert_eq!(
            validate_credentials(&missing_name),
            Err("Name is required".to_string())
        );

        let missing_enrollment = Credentials {
            name: "Alice".to_string(),
            enrollment: String::new(),
        };
        assert_eq!(
            validate_credentials(&missing_enrollment),
            Err("Enrollment number is required".to_string())
        );

        let complete = Credentials {
            name: "Alice".to_string(),
            enrollment: "E100".to_string(),
        };
        assert!(validate_credentials(&complete).is_ok());
    }
}
