//! Test: A field whose type has no `Anonymise` implementation should fail.
//!
//! `std::fs::File` is not a value the engine knows how to copy.

use anonymiser::Anonymise;

#[derive(Anonymise, Default)]
struct Upload {
    pub name: String,
    pub file: Option<std::fs::File>,
}

fn main() {}
