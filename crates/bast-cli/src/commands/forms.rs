use bast_core::error::BastError;
use bast_core::form::builtin;
use std::path::Path;

pub fn list() -> Result<(), BastError> {
    println!("Available form definitions:\n");
    for name in builtin::PRESETS {
        let form = builtin::load_preset(name)?;
        println!("  {:<12} {} (v{}) [sheet {}]", name, form.name, form.version, form.sheet);
        if let Some(ref desc) = form.description {
            println!("               {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), BastError> {
    let form = builtin::load_preset(preset)?;

    println!("{} (version {})\n", form.name, form.version);
    if let Some(ref desc) = form.description {
        println!("{}\n", desc);
    }
    println!("Target sheet: {}", form.sheet);
    println!("Output file:  {}\n", form.output_name);

    println!("Field cells:");
    let width = form
        .fields
        .iter()
        .map(|f| f.cell.len())
        .max()
        .unwrap_or(4);
    for mapping in &form.fields {
        println!("  {:<width$}  <- {}", mapping.cell, mapping.field, width = width);
    }

    if !form.openers.is_empty() {
        println!("\nOpeners (spelled from '{}'):", form.date_field);
        for opener in &form.openers {
            let label = opener.label.as_deref().unwrap_or("-");
            println!("  {:<5} {:<6} {}", opener.cell, label, opener.template);
        }
    }
    println!();

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), BastError> {
    let form = bast_core::form::load_form(file)?;

    println!("Form '{}' (v{}) is valid.", form.name, form.version);
    println!("  Sheet: {}", form.sheet);
    println!("  Fields: {} cells", form.fields.len());
    println!("  Openers: {} cells", form.openers.len());

    // Possible mistakes that still load (warnings, not errors)
    let mut warnings = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for mapping in &form.fields {
        if !seen.insert(mapping.field.as_str()) {
            warnings.push(format!(
                "field '{}' is written to more than one cell",
                mapping.field
            ));
        }
    }
    if !form.openers.is_empty() && !form.fields.iter().any(|f| f.field == form.date_field) {
        warnings.push(format!(
            "date field '{}' is spelled in openers but not written to any cell",
            form.date_field
        ));
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
