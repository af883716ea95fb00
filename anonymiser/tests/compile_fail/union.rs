//! Test: Unions cannot derive `Anonymise`.

use anonymiser::Anonymise;

#[derive(Anonymise)]
union Bits {
    pub int: u32,
    pub float: f32,
}

fn main() {}
