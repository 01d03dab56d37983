use crate::support::print_json_or_exit;
use abem_core::to_camel_case;
use serde::Serialize;

#[derive(Serialize)]
struct Normalized<'a> {
    token: &'a str,
    normalized: String,
}

pub fn run(tokens: &[String], json_output: bool) {
    let normalized: Vec<Normalized<'_>> = tokens
        .iter()
        .map(|token| Normalized {
            token,
            normalized: to_camel_case(token),
        })
        .collect();

    if json_output {
        print_json_or_exit(&normalized, "normalize");
    } else {
        for entry in &normalized {
            println!("{}", entry.normalized);
        }
    }
}
