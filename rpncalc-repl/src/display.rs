use rpncalc_core::{Engine, Operation};

/// Render the stack bottom to top, labels and values right aligned.
pub fn format_stack(engine: &Engine) -> String {
    let rows: Vec<_> = engine
        .labelled()
        .map(|(label, n)| (label.to_string(), n.to_string()))
        .collect();

    let label_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(0);

    let mut out = String::from("\nStack:\n");
    for (label, value) in rows {
        out += &format!(
            "{:>lw$}: {:>vw$}\n",
            label,
            value,
            lw = label_width,
            vw = value_width
        );
    }
    out
}

pub fn help_text() -> String {
    let mut out = String::from(
        "Enter one number or operation per line. Numbers are pushed onto the stack;\n\
         operations take their operands from the top of the stack (x, then y).\n\n",
    );
    for entry in Operation::names() {
        let mut names = vec![entry.name];
        names.extend(entry.aliases);
        out += &format!("  {:<10} {}\n", names.join(", "), entry.summary);
    }
    out
}
