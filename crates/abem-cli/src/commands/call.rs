use crate::support::{parse_loose, print_json_or_exit};
use abem_core::{Abem, Call, Outcome};
use serde_json::{Value, json};

pub fn run(abem: &Abem, args: &[String], json_output: bool) {
    let values: Vec<Value> = args.iter().map(|arg| parse_loose(arg)).collect();
    let call = Call::from_values(&values).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    });
    let arity = call.arity();
    let outcome = abem.call(call).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    });

    if json_output {
        let payload = json!({
            "arity": arity,
            "kind": outcome.kind(),
            "class": outcome.into_class_name(),
        });
        print_json_or_exit(&payload, "call");
        return;
    }

    match outcome {
        Outcome::Unbound(abem) => {
            let conventions = abem.conventions();
            println!("abem (unbound)");
            println!("  Element separator: {}", conventions.element_separator);
            println!("  Modifier prefix: {}", conventions.modifier_prefix);
        }
        other => {
            if let Some(class) = other.into_class_name() {
                println!("{class}");
            }
        }
    }
}
