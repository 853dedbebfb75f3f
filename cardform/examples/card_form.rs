// Line-driven card form session on stdin.
//
// Commands:
//   set <field> <value...>   field is one of cardholderName, cardNumber,
//                            expMonth, expYear, cvv
//   submit                   validate and confirm
//   continue                 back to the form after confirming
//
// Run with: `RUST_LOG=debug cargo run --example card_form`

use std::io::{self, BufRead};

use cardform::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut form = FormController::new();
    let mut renderer = TextRenderer::new(io::stdout());
    form.render(&mut renderer)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match FormEvent::parse_command(&line) {
            Ok(event) => {
                form.dispatch(event);
                println!();
                form.render(&mut renderer)?;
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
