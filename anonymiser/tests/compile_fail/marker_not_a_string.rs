//! Test: Marker names are string literals, not paths.

use anonymiser::Anonymise;

#[derive(Anonymise, Default)]
struct Account {
    #[anonymise(Email)]
    pub email: String,
}

fn main() {}
