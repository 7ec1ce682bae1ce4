//! # goofy
//!
//! An interpreter for goofy, a tiny stack-oriented language whose
//! opcodes sound the way they act: values are SHOVEd onto a stack,
//! YEETed apart, GLUEd together, and the program FREEZEs when it is
//! done.
//!
//! Install with `cargo install goofy-lang`, then run a script:
//! ```text
//! goofy countdown.goofy
//! ```
//!
//! A program is just whitespace-separated words:
//! ```text
//! SHOVE 3
//! loop:
//! YELL "and..."
//! YEET 1
//! BOUNCE > 0 #loop
//! YELL "liftoff"
//! ```
//!
//! Start with the [_Introduction] and keep the error appendix nearby.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod exec;
pub mod lang;
