use clap::Parser;
use reckon::repl::{Response, Session};
use rustyline::{DefaultEditor, error::ReadlineError};

/// reckon evaluates integer arithmetic and explains what is wrong with
/// malformed input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the syntax tree of each expression before its result.
    #[arg(short = 't', long)]
    show_tree: bool,

    /// Expression to evaluate. Starts an interactive session when omitted.
    expression: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut session = Session::new(args.show_tree);

    if let Some(expression) = args.expression {
        let response = session.handle(&expression);
        if response.is_failure() {
            eprintln!("{response}");
            std::process::exit(1);
        }
        println!("{response}");
        return;
    }

    if let Err(e) = run_prompt(&mut session) {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}

fn run_prompt(session: &mut Session) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        };
        editor.add_history_entry(line.as_str())?;

        match session.handle(&line) {
            Response::Clear => editor.clear_screen()?,
            response => {
                println!();
                println!("{response}");
                println!();
            },
        }
    }
}
