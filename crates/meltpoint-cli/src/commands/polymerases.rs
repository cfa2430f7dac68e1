use crate::error::Result;
use meltpoint::core::models::conditions::Polymerase;

pub fn run() -> Result<()> {
    let default = Polymerase::default();
    for polymerase in Polymerase::catalog() {
        let marker = if polymerase == default { " (default)" } else { "" };
        println!("{}{}", polymerase, marker);
    }
    Ok(())
}
