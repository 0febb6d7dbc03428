use bast_core::config::BastConfig;
use bast_core::error::BastError;
use bast_core::form::builtin;
use std::path::PathBuf;

use crate::output;

pub struct FillArgs {
    pub source_file: PathBuf,
    pub form: Option<PathBuf>,
    pub preset: Option<String>,
    pub sheet: Option<String>,
    pub config: Option<PathBuf>,
    pub output_format: String,
    pub out: Option<PathBuf>,
}

pub fn run(args: FillArgs) -> Result<(), BastError> {
    let config = BastConfig::load(args.config.as_deref())?;

    // Command-line flags win over the config file.
    let form = match select_form(args.form, args.preset, config.form) {
        FormSource::File(path) => bast_core::form::load_form(&path)?,
        FormSource::Preset(name) => builtin::load_preset(&name)?,
    };
    let sheet = args.sheet.or(config.sheet);

    let xlsx_bytes = std::fs::read(&args.source_file)?;
    let report = bast_core::fill_workbook(&xlsx_bytes, &form, sheet.as_deref())?;

    match args.out {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Filled {} form(s), written to {}",
                report.forms.len(),
                path.display()
            );
            if !report.failures.is_empty() {
                eprintln!("  {} record(s) skipped", report.failures.len());
            }
        }
        None => match args.output_format.as_str() {
            "json" => output::json::print(&report)?,
            _ => output::table::print_fill(&report),
        },
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
enum FormSource {
    File(PathBuf),
    Preset(String),
}

/// `--form`, then `--preset`, then the config file's `form`, then `bast-master`.
fn select_form(
    form: Option<PathBuf>,
    preset: Option<String>,
    config_form: Option<PathBuf>,
) -> FormSource {
    match (form, preset) {
        (Some(path), _) => FormSource::File(path),
        (None, Some(name)) => FormSource::Preset(name),
        (None, None) => match config_form {
            Some(path) => FormSource::File(path),
            None => FormSource::Preset("bast-master".into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preset_beats_config_form() {
        assert_eq!(
            select_form(None, Some("bast-master".into()), Some("site.json".into())),
            FormSource::Preset("bast-master".into())
        );
    }

    #[test]
    fn test_form_precedence() {
        assert_eq!(
            select_form(Some("cli.json".into()), None, Some("site.json".into())),
            FormSource::File("cli.json".into())
        );
        assert_eq!(
            select_form(None, None, Some("site.json".into())),
            FormSource::File("site.json".into())
        );
        assert_eq!(
            select_form(None, None, None),
            FormSource::Preset("bast-master".into())
        );
    }
}
