//! Test: Private fields are never read, so marking one should fail.

use anonymiser::Anonymise;

#[derive(Anonymise, Default)]
struct Account {
    pub id: u64,
    #[anonymise("email")]
    email: String,
}

fn main() {}
