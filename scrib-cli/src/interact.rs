use dialoguer::Input;
use eyre::{eyre, Context, Result};
use scrib::{ast::Record, format::field_order};

pub fn user_input(prompt: String) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}

/// Prompts for each primary field of the record's kind that has not been set.
pub fn user_resolve_record(record: &mut Record) -> Result<()> {
    let order = field_order(record.kind());

    for &name in order.primary {
        if record.get_field(name).is_none() {
            let input = user_input(format!("Enter value for the {name} field"))?;
            record.set_field(name, input);
        }
    }

    Ok(())
}
