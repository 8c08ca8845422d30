use validator::ValidationErrors;

/// Flattens `validator` errors into a single `; `-separated message.
///
/// Field errors without a custom message fall back to `"<field> is invalid"`
/// so that no failure is reported as an empty string. Fields are sorted to
/// keep the message stable across runs.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
