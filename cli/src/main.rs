#![forbid(unsafe_code)]
#![deny(clippy::pedantic)]

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

mod args;
mod config;
mod eval;
mod interrupt;
mod random;

enum EvalResult {
	Ok,
	Err,
	NoInput,
}

fn use_color() -> bool {
	std::env::var_os("NO_COLOR").is_none()
}

fn eval_and_print(
	line: &str,
	ctrl_c: &impl exact_core::Interrupt,
	rng: &mut random::Random,
) -> EvalResult {
	match eval::evaluate(line, ctrl_c, rng) {
		Ok(None) => EvalResult::NoInput,
		Ok(Some(out)) => {
			println!("{out}");
			EvalResult::Ok
		}
		Err(msg) => {
			if use_color() {
				eprintln!("{}", ansi_term::Colour::Red.bold().paint(format!("Error: {msg}")));
			} else {
				eprintln!("Error: {msg}");
			}
			EvalResult::Err
		}
	}
}

fn print_help(explain_quitting: bool) {
	println!(
		concat!(
			"exact evaluates rational arithmetic without ever rounding.\n",
			"\n",
			"Enter a value to see its decimal expansion (recurring digits\n",
			"in brackets), or chain values with + - * / %. Values may be\n",
			"integers (42), fractions (22/7), decimals with an optional\n",
			"recurring block (4.1[6]), or mixed fractions (-4 538/1284).\n",
			"\n",
			"Commands:\n",
			"  frac <expr>                  show the result as a fraction\n",
			"  simplify <value> [budget_ms] reduce a fraction (default 100ms)\n",
			"  rand <digits>                random integer of that many digits\n",
			"\n",
			"Version: {}"
		),
		exact_core::get_version()
	);
	if explain_quitting {
		println!("\nTo quit, type `quit`.");
	}
}

fn repl_loop() -> i32 {
	let Ok(mut rl) = DefaultEditor::new() else {
		eprintln!("Error: failed to initialize the line editor");
		return 1;
	};
	let history_path = config::get_history_file_path();
	if let Some(path) = &history_path {
		// no previous history is fine
		let _ = rl.load_history(path);
	}
	let interrupt = interrupt::CtrlC::install();
	let mut rng = random::Random::new();
	let mut last_command_success = true;
	loop {
		match rl.readline("> ") {
			Ok(line) => match line.as_str() {
				"exit" | "exit()" | ".exit" | ":exit" | "quit" | "quit()" | ":quit" | ":q" => {
					break;
				}
				"help" | "?" => print_help(true),
				line => {
					let _ = rl.add_history_entry(line);
					interrupt.clear();
					match eval_and_print(line, &interrupt, &mut rng) {
						EvalResult::Ok | EvalResult::NoInput => last_command_success = true,
						EvalResult::Err => last_command_success = false,
					}
				}
			},
			Err(ReadlineError::Interrupted) => println!("Use Ctrl-D (i.e. EOF) to exit"),
			Err(ReadlineError::Eof) => break,
			Err(err) => {
				println!("Error: {err}");
				break;
			}
		}
		if let Some(path) = &history_path {
			let _ = rl.save_history(path);
		}
	}
	i32::from(!last_command_success)
}

fn main() {
	let action: args::Action = std::env::args().skip(1).collect();
	match action {
		args::Action::Help => print_help(false),
		args::Action::Version => println!("{}", exact_core::get_version()),
		args::Action::Eval(expr) => {
			let interrupt = interrupt::CtrlC::install();
			let mut rng = random::Random::new();
			std::process::exit(match eval_and_print(&expr, &interrupt, &mut rng) {
				EvalResult::Ok | EvalResult::NoInput => 0,
				EvalResult::Err => 1,
			});
		}
		args::Action::Repl => {
			std::process::exit(repl_loop());
		}
	}
}
