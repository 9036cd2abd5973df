use std::{env, fs, process};

use polychain::{PolymerError, Polymerizer, cli::CommandLineConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", CommandLineConfig::help());
            process::exit(2);
        }
    };

    let polymerizer = Polymerizer::new(config.polymer_config());
    let succeeded = match (&config.batch, &config.notation) {
        (Some(path), _) => run_batch(&polymerizer, path, config.json),
        (None, Some(notation)) => run_single(&polymerizer, notation, config.json),
        (None, None) => false,
    };
    if !succeeded {
        process::exit(1);
    }
}

fn run_single(polymerizer: &Polymerizer, notation: &str, json: bool) -> bool {
    match render(polymerizer, notation, json) {
        Ok(line) => {
            println!("{line}");
            true
        }
        Err(err) => {
            eprintln!("Error: {err}");
            false
        }
    }
}

fn run_batch(polymerizer: &Polymerizer, path: &str, json: bool) -> bool {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: cannot read {path}: {err}");
            return false;
        }
    };
    let mut all_ok = true;
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match render(polymerizer, line, json) {
            Ok(output) => println!("{output}"),
            Err(err) => {
                all_ok = false;
                println!("Error: {err}");
            }
        }
    }
    all_ok
}

fn render(polymerizer: &Polymerizer, notation: &str, json: bool) -> Result<String, PolymerError> {
    if !json {
        return polymerizer.polymerize(notation);
    }
    let output = polymerizer.polymerize_with_report(notation)?;
    serde_json::to_string(&output).map_err(|e| PolymerError::invalid_structure(e.to_string()))
}
