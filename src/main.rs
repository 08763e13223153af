use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use golex::{
    display_error, lexer::lexer::tokenize, report::logfile::write_log,
    report::report::render_listing,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        println!("Usage: golex <file.go>");
        exit(1);
    }

    let file_path = PathBuf::from(&args[1]);

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            println!("Error reading '{}': {}", file_path.display(), error);
            return;
        }
    };

    let start = Instant::now();
    let result = tokenize(&source);
    println!("Tokenized in {:?}\n", start.elapsed());

    let listing = render_listing(&file_path, &result.tokens, &result.diagnostics);
    print!("{}", listing);

    if let Some(error) = &result.fatal {
        println!();
        display_error(error, &source, &file_path);
    }

    match write_log(&file_path, &listing) {
        Ok(log_path) => println!("\nLog written to {}", log_path.display()),
        Err(error) => println!("\nFailed to write log: {}", error),
    }
}
