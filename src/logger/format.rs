use std::fmt::{self, Display, Write};

/// Concatenates the arguments with no separators.
pub fn sprint(args: &[&dyn Display]) -> String {
    let mut message = String::new();
    for arg in args {
        let _ = write!(message, "{}", arg);
    }
    message
}

/// Renders `format_args!` output.
pub fn sprintf(args: fmt::Arguments<'_>) -> String {
    fmt::format(args)
}

/// Joins the arguments with single spaces and ends with a newline.
pub fn sprintln(args: &[&dyn Display]) -> String {
    let mut message = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        let _ = write!(message, "{}", arg);
    }
    message.push('\n');
    message
}
