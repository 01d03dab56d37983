use crate::support::{parse_loose, print_json_or_exit};
use abem_core::{Abem, Value};
use serde_json::json;

pub fn run(abem: &Abem, values: &[String], json_output: bool) {
    let parsed: Vec<Value> = values
        .iter()
        .map(|raw| {
            serde_json::from_value(parse_loose(raw)).unwrap_or_else(|err| {
                eprintln!("error: join accepts scalar values only, got `{raw}`: {err}");
                std::process::exit(2);
            })
        })
        .collect();
    let joined = abem.join(parsed);

    if json_output {
        print_json_or_exit(&json!({ "class": joined }), "join");
    } else {
        println!("{joined}");
    }
}
