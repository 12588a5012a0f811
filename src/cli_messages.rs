//! Console output for the one-shot commands
//!
//! Every line reads `[TAG] title: details`, with the tag coloured by tone.
//! Errors go to stderr so that `status` and `locations` output stays pipeable.

/// Kind of console line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Info => "1;36",
            Tone::Warn => "1;33",
            Tone::Error => "1;31",
            Tone::Success => "1;32",
        }
    }
}

/// Formats a line without printing it.
pub fn format_line(tone: Tone, title: &str, details: &str) -> String {
    let tag = format!("\x1b[{}m[{}]\x1b[0m", tone.ansi(), tone);
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}: {}", tag, title, details)
    }
}

pub fn emit(tone: Tone, title: &str, details: &str) {
    let line = format_line(tone, title, details);
    match tone {
        Tone::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::emit($crate::cli_messages::Tone::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::emit($crate::cli_messages::Tone::Warn, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::emit($crate::cli_messages::Tone::Error, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::emit($crate::cli_messages::Tone::Success, $title, &format!($($details)*))
    };
}
