//! Output formatting for the CLI.

use crate::cli::OutputFormat;
use colored::*;
use formease_domain::FormState;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the pre-filled form and the fields-filled count.
    pub fn format_form(&self, form: &FormState, fields_filled: usize) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => self.format_form_json(form, fields_filled),
            OutputFormat::Text => Ok(self.format_form_text(form, fields_filled)),
        }
    }

    fn format_form_json(&self, form: &FormState, fields_filled: usize) -> anyhow::Result<String> {
        let json = serde_json::json!({
            "firstName": form.first_name,
            "surname": form.surname,
            "address": form.address,
            "postcode": form.postcode,
            "email": form.email,
            "favoriteTimeOfDay": form.favorite_time_of_day,
            "fieldsFilled": fields_filled,
        });
        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn format_form_text(&self, form: &FormState, fields_filled: usize) -> String {
        let mut out = String::new();
        out.push_str(&self.headline(&format!("{} field(s) have been pre-filled for you.", fields_filled)));
        out.push('\n');

        for (label, value) in [
            ("First Name", &form.first_name),
            ("Surname", &form.surname),
            ("Address", &form.address),
            ("Postcode", &form.postcode),
            ("Email", &form.email),
            ("Favourite Time of Day", &form.favorite_time_of_day),
        ] {
            let shown = if value.is_empty() { "-" } else { value };
            out.push_str(&format!("{:>22}: {}\n", self.label(label), shown));
        }

        out
    }

    fn headline(&self, text: &str) -> String {
        if self.color_enabled {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str) -> String {
        if self.color_enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FormState {
        FormState {
            first_name: "John".to_string(),
            surname: "Doe".to_string(),
            address: "10 Elm St, Anytown".to_string(),
            postcode: "AN1 1AA".to_string(),
            email: "john@x.com".to_string(),
            favorite_time_of_day: "Morning".to_string(),
            create_login: false,
        }
    }

    #[test]
    fn test_json_output_has_exactly_the_contract_keys() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_form(&sample_form(), 6).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 7); // six contract keys + fieldsFilled
        assert_eq!(obj["firstName"], "John");
        assert_eq!(obj["favoriteTimeOfDay"], "Morning");
        assert_eq!(obj["fieldsFilled"], 6);
        assert!(obj.get("createLogin").is_none());
    }

    #[test]
    fn test_text_output_reports_count_and_fields() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_form(&sample_form(), 6).unwrap();

        assert!(output.contains("6 field(s) have been pre-filled for you."));
        assert!(output.contains("John"));
        assert!(output.contains("AN1 1AA"));
    }

    #[test]
    fn test_text_output_marks_empty_fields() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_form(&FormState::default(), 0).unwrap();

        assert!(output.contains(": -"));
    }
}
