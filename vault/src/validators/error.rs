use validator::ValidationErrors;

/// Joins field validation messages into a single line.
///
/// Fields are visited in name order so the message is stable; errors without
/// a message fall back to their code.
pub fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();

    messages.join(", ")
}
