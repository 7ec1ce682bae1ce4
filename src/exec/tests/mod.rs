use crate::exec::{Engine, Event};
use crate::lang::lex;


fn load(source: &str) -> Engine {
    Engine::new(lex(source))
}

fn run(engine: &mut Engine) -> String {
    run_cycles(engine, 5000)
}

fn run_cycles(engine: &mut Engine, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = engine.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Input => {
                break;
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
