use std::f64::consts::PI;

use crate::console::Console;
use crate::registry::{Program, Registry};

/// The bundled example programs. Each is a plain unit struct so its
/// constructor needs no arguments.
pub fn register_all(registry: &mut Registry) {
    registry.register("circumference", || Box::new(Circumference));
    registry.register("adder", || Box::new(Adder));
    registry.register("quiz", || Box::new(Quiz));
}

pub struct Circumference;

impl Program for Circumference {
    fn run(&mut self, console: &mut Console) -> anyhow::Result<()> {
        let radius = console.read_double("radius: ")?;
        console.print("circumference: ")?;
        console.println(2.0 * PI * radius)?;
        Ok(())
    }
}

pub struct Adder;

impl Program for Adder {
    fn run(&mut self, console: &mut Console) -> anyhow::Result<()> {
        let a = console.read_int("first: ")?;
        let b = console.read_int("second: ")?;
        console.println(format!("{} + {} = {}", a, b, a as i64 + b as i64))?;
        Ok(())
    }
}

pub struct Quiz;

impl Program for Quiz {
    fn run(&mut self, console: &mut Console) -> anyhow::Result<()> {
        console.println("A char in Rust is always one byte.")?;
        match console.read_bool("true or false? ")? {
            false => console.println("Correct!")?,
            true => console.println("Wrong! A char is four bytes.")?,
        }
        Ok(())
    }
}
