//! Test: An empty marker name should fail.

use anonymiser::Anonymise;

#[derive(Anonymise, Default)]
struct Account {
    #[anonymise("")]
    pub email: String,
}

fn main() {}
