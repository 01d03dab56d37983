use crate::support::print_json_or_exit;
use abem_core::{Abem, AbemError, Modifiers};
use serde_json::json;

pub struct Args {
    pub block: String,
    pub elem: Option<String>,
    pub mods: Vec<String>,
    pub mods_json: Option<String>,
    pub json: bool,
}

pub fn run(abem: &Abem, args: Args) {
    let mods = parse_modifiers_or_exit(&args);
    let class = build(abem, &args.block, args.elem.as_deref(), mods.as_ref()).unwrap_or_else(
        |err| {
            eprintln!("error: {err}");
            std::process::exit(1);
        },
    );

    if args.json {
        let payload = json!({
            "block": args.block,
            "elem": args.elem,
            "modifiers": mods,
            "class": class,
        });
        print_json_or_exit(&payload, "class");
    } else {
        println!("{class}");
    }
}

fn parse_modifiers_or_exit(args: &Args) -> Option<Modifiers> {
    if let Some(raw) = &args.mods_json {
        let value: serde_json::Value = serde_json::from_str(raw).unwrap_or_else(|err| {
            eprintln!("error: failed to parse --mods-json: {err}");
            std::process::exit(2);
        });
        let mods = Modifiers::from_json(&value).unwrap_or_else(|err| {
            eprintln!("error: invalid --mods-json: {err}");
            std::process::exit(2);
        });
        return Some(mods);
    }
    if args.mods.is_empty() {
        None
    } else {
        Some(Modifiers::list(args.mods.iter()))
    }
}

fn build(
    abem: &Abem,
    block: &str,
    elem: Option<&str>,
    mods: Option<&Modifiers>,
) -> Result<String, AbemError> {
    let block = abem.block(block)?;
    Ok(match (elem, mods) {
        (Some(elem), Some(mods)) => block.elem_with(elem, mods)?,
        (Some(elem), None) => block.elem(elem)?.class(),
        (None, Some(mods)) => block.with(mods)?,
        (None, None) => block.class(),
    })
}
