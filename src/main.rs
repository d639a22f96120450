// Self Calculus Implementation
//
// A minimal dependently typed lambda calculus with self types and
// computational-irrelevance erasure, after "Self Types for Dependently
// Typed Lambda Encodings" by Peng Fu and Aaron Stump
// https://doi.org/10.1007/978-3-319-08918-8_15
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

use std::env;
use std::fs;
use std::io;
use std::io::Write;

use self_calculus::{normalize, parse_module_str, parse_term_str, Module};

fn main() {
    let mut module = Module::new();

    if let Some(path) = env::args().nth(1) {
        match fs::read_to_string(&path) {
            Err(e) => {
                println!("Error reading {}: {}", path, e);
                std::process::exit(1);
            }
            Ok(source) => match parse_module_str(&source) {
                Err(e) => {
                    println!("Error parsing {}: {}", path, e);
                    std::process::exit(1);
                }
                Ok(parsed) => {
                    println!("Loaded {} definition(s) from {}", parsed.len(), path);
                    module = parsed;
                }
            },
        }
    }

    println!("Self Calculus REPL v0.1.0");
    println!("Type terms to normalize, or Ctrl-D to exit");
    println!();

    let mut infile: Box<dyn io::BufRead> = Box::new(io::stdin().lock());

    loop {
        print!("self> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        let input_result = infile.read_line(&mut line);

        match input_result {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                println!("Error reading input: {}", e);
                break;
            }
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_term_str(trimmed) {
                    Err(e) => {
                        println!("Parse error: {}", e);
                    }
                    Ok(term) => {
                        // Note: non-normalizing terms make this loop forever;
                        // the calculus itself imposes no step bound
                        println!("{}", normalize(&module, &term));
                    }
                }
            }
        }
    }
}
