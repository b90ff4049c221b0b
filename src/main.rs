mod console;
mod launch;
mod parse;
mod programs;
mod registry;

use registry::Registry;

fn main() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    programs::register_all(&mut registry);
    launch::run(&registry)
}
