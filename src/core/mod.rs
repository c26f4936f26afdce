//! Pure command-parsing logic, free of session state.

mod parser;

pub use parser::{
    parse_deadline, parse_event, parse_index, parse_line, parse_priority_arg, split_command,
    Command,
};
