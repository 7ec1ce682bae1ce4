/*!
# Language Module

Lexical analysis for the goofy language. The classifier here assigns a
kind to every whitespace-delimited word of source text; it has no
opinion about whether the result is a runnable program.

*/

mod lex;
mod token;

pub use lex::lex;
pub use token::Kind;
pub use token::Relop;
pub use token::Token;
