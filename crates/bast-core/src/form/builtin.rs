use crate::error::BastError;
use crate::form::schema::FormDefinition;
use crate::form::validate_form;

const BAST_MASTER_JSON: &str = include_str!("../../../../forms/bast-master.json");

/// Available predefined form definitions.
pub const PRESETS: &[&str] = &["bast-master"];

/// Load a predefined form definition by name.
pub fn load_preset(name: &str) -> Result<FormDefinition, BastError> {
    let json = match name {
        "bast-master" => BAST_MASTER_JSON,
        _ => {
            return Err(BastError::FormInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let form: FormDefinition = serde_json::from_str(json)?;
    validate_form(&form)?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bast_master() {
        let form = load_preset("bast-master").unwrap();
        assert_eq!(form.sheet, "MASTER");
        assert_eq!(form.date_field, "Tanggal PKS");
        assert_eq!(form.fields.len(), 24);
        assert_eq!(form.openers.len(), 2);
        assert!(form
            .fields
            .iter()
            .any(|f| f.cell == "J10" && f.field == "Jangka Waktu Kerja"));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
