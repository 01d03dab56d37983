use abem_core::{Abem, Conventions};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "abem.toml";

/// Build the builder from `--config`, else `./abem.toml`, else defaults.
pub fn load_abem_or_exit(config: Option<&str>) -> Abem {
    let conventions = match config {
        Some(path) => load_conventions_or_exit(path),
        None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
            load_conventions_or_exit(DEFAULT_CONFIG_PATH)
        }
        None => Conventions::default(),
    };
    Abem::new(conventions).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    })
}

fn load_conventions_or_exit(path: &str) -> Conventions {
    Conventions::load(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    })
}

/// Read a command-line argument as JSON when it parses, else as a string.
///
/// `abem call card '{"open":true}'` needs no quoting around `card`; a
/// literal string that happens to be valid JSON can still be forced with
/// JSON quotes (`'"true"'`).
pub fn parse_loose(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

pub fn print_json_or_exit<T: Serialize>(payload: &T, what: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {what} json: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loose_args_prefer_json() {
        assert_eq!(parse_loose("card"), json!("card"));
        assert_eq!(parse_loose("\"true\""), json!("true"));
        assert_eq!(parse_loose("true"), json!(true));
        assert_eq!(parse_loose("0"), json!(0));
        assert_eq!(parse_loose(r#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(parse_loose("[\"x\", null]"), json!(["x", null]));
        assert_eq!(parse_loose(""), json!(""));
    }
}
