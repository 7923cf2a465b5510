/// Which action should be executed?
///
/// This implements [`FromIterator`] and can be `collect`ed from the
/// `env::args().skip(1)` iterator.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
	/// Print the help message.
	Help,
	/// Print the current version.
	Version,
	/// Enter the REPL.
	Repl,
	/// Evaluate the arguments.
	Eval(String),
}

impl FromIterator<String> for Action {
	fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
		iter.into_iter().fold(Action::Repl, |action, arg| {
			use Action::{Eval, Help, Repl, Version};
			match (action, arg.as_str()) {
				// If any argument is shouting for help, print help!
				(_, "help" | "--help" | "-h") | (Help, _) => Help,
				// Once we're set on printing the version, only a request
				// for help can overwrite that
				(Repl | Eval(_), "--version" | "-v" | "-V") | (Version, _) => Version,
				// Ignore empty arguments, so that `exact "" ""` still
				// enters the repl
				(Repl, arg) if !arg.trim().is_empty() => Eval(String::from(arg)),
				(Repl, _) => Repl,
				(Eval(eval), arg) => Eval(eval + " " + arg),
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::Action;

	macro_rules! action {
		($( $arg:literal ),*) => {
			vec![ $( $arg.to_string() ),* ]
				.into_iter()
				.collect::<Action>()
		}
	}

	#[test]
	fn help_argument_works() {
		assert_eq!(Action::Help, action!["-h"]);
		assert_eq!(Action::Help, action!["--help"]);
		assert_eq!(Action::Help, action!["help"]);
		assert_eq!(Action::Help, action!["1/3", "+ 1", "help"]);
		assert_eq!(Action::Help, action!["--version", "1/3", "--help"]);
	}

	#[test]
	fn version_argument_works() {
		assert_eq!(Action::Version, action!["-v"]);
		assert_eq!(Action::Version, action!["-V"]);
		assert_eq!(Action::Version, action!["--version"]);
		assert_eq!(Action::Version, action!["before", "-v", "and", "after"]);
	}

	#[test]
	fn normal_arguments_are_collected_correctly() {
		use Action::Eval;
		assert_eq!(Eval(String::from("1/3 + 1/6")), action!["1/3", "+", "1/6"]);
		assert_eq!(Eval(String::from("1/3 + 1/6")), action!["1/3 + 1/6"]);
	}

	#[test]
	fn empty_arguments() {
		assert_eq!(Action::Repl, action![]);
		assert_eq!(Action::Repl, action![""]);
		assert_eq!(Action::Repl, action!["", ""]);
		assert_eq!(Action::Repl, action!["\t", " "]);
		assert_eq!(Action::Eval(String::from("1")), action!["\t", " ", "1"]);
	}
}
