use std::fmt;

use crate::{error::ReckonError, interpreter::evaluator::core::evaluate, parse, util::tree::render_tree};

/// A dot-command understood by the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `.showTree` or `.st`
    ToggleTree,
    /// `.clear` or `.cls`
    Clear,
}

impl Command {
    /// Recognizes a command line. Anything else is an expression.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            ".showTree" | ".st" => Some(Self::ToggleTree),
            ".clear" | ".cls" => Some(Self::Clear),
            _ => None,
        }
    }
}

/// What the session produced for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Tree display was switched; holds the new setting.
    TreeToggled(bool),
    /// The front end should clear the screen.
    Clear,
    /// An expression was processed.
    Evaluated {
        /// The rendered syntax tree, when tree display is on.
        tree:    Option<String>,
        /// The value, or why there is none.
        outcome: Result<i32, ReckonError>,
    },
}

impl Response {
    /// Returns `true` if the line was an expression that did not produce a
    /// value.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Evaluated { outcome: Err(_), .. })
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TreeToggled(on) => write!(f, "Show Tree: {}", if *on { "On" } else { "Off" }),
            Self::Clear => Ok(()),
            Self::Evaluated { tree, outcome } => {
                if let Some(tree) = tree {
                    writeln!(f, "{tree}")?;
                }
                match outcome {
                    Ok(value) => write!(f, "{value}"),
                    Err(err) => write!(f, "{err}"),
                }
            },
        }
    }
}

/// State carried between lines of an interactive session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Whether each expression's syntax tree is shown before its result.
    pub show_tree: bool,
}

impl Session {
    /// Creates a session with the given tree display setting.
    #[must_use]
    pub const fn new(show_tree: bool) -> Self {
        Self { show_tree }
    }

    /// Handles one input line: either a dot-command or an expression.
    ///
    /// Expressions with diagnostics are not evaluated; the diagnostics are
    /// returned instead.
    ///
    /// # Example
    /// ```
    /// use reckon::repl::{Response, Session};
    ///
    /// let mut session = Session::default();
    ///
    /// assert_eq!(session.handle("6 * 7").to_string(), "42");
    /// assert_eq!(session.handle(".st"), Response::TreeToggled(true));
    /// assert!(session.handle("6 *").is_failure());
    /// ```
    pub fn handle(&mut self, line: &str) -> Response {
        match Command::parse(line) {
            Some(Command::ToggleTree) => {
                self.show_tree = !self.show_tree;
                Response::TreeToggled(self.show_tree)
            },
            Some(Command::Clear) => Response::Clear,
            None => self.evaluate_line(line),
        }
    }

    fn evaluate_line(&self, line: &str) -> Response {
        let syntax_tree = parse(line);
        let tree = self.show_tree.then(|| render_tree(&syntax_tree.root));

        let outcome = if syntax_tree.is_valid() {
            evaluate(&syntax_tree.root).map_err(ReckonError::from)
        } else {
            Err(ReckonError::Diagnostics(syntax_tree.diagnostics))
        };

        Response::Evaluated { tree, outcome }
    }
}
